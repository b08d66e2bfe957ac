//! Translation memoization
//!
//! Presentation layers translate alert and recommendation text on the fly.
//! The cache and the translator are injected collaborators; nothing here
//! talks to a translation service.

use std::collections::HashMap;

use thiserror::Error;

/// Language every record is authored in
pub const SOURCE_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),
    #[error("Translation service unavailable: {0}")]
    Unavailable(String),
    #[error("Translation rejected: {0}")]
    Rejected(String),
}

/// Memo of translated texts keyed by source text and target language
pub trait TranslationCache {
    fn get(&self, text: &str, language: &str) -> Option<String>;
    fn set(&mut self, text: &str, language: &str, translated: String);
    fn clear(&mut self);
}

pub trait Translator {
    fn translate(&self, text: &str, language: &str) -> Result<String, TranslationError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryTranslationCache {
    entries: HashMap<(String, String), String>,
}

impl MemoryTranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationCache for MemoryTranslationCache {
    fn get(&self, text: &str, language: &str) -> Option<String> {
        self.entries
            .get(&(text.to_string(), language.to_string()))
            .cloned()
    }

    fn set(&mut self, text: &str, language: &str, translated: String) {
        self.entries
            .insert((text.to_string(), language.to_string()), translated);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Text handed back by [`CachedTranslator::translate_reporting`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// Set when the translator failed and `text` is the source text
    pub error: Option<TranslationError>,
}

/// Translator fronted by a cache
///
/// English targets and blank texts pass through untouched. Failed
/// translations fall back to the source text and are not cached, so a
/// later call retries.
#[derive(Debug)]
pub struct CachedTranslator<T, C> {
    translator: T,
    cache: C,
}

impl<T: Translator, C: TranslationCache> CachedTranslator<T, C> {
    pub fn new(translator: T, cache: C) -> Self {
        Self { translator, cache }
    }

    /// Translate with fallback, discarding any translator error
    ///
    /// Hosts that want to log failures call `translate_reporting` instead.
    pub fn translate(&mut self, text: &str, language: &str) -> String {
        self.translate_reporting(text, language).text
    }

    /// Translate with fallback, returning the translator error alongside
    pub fn translate_reporting(&mut self, text: &str, language: &str) -> Translated {
        if language == SOURCE_LANGUAGE || text.trim().is_empty() {
            return Translated {
                text: text.to_string(),
                error: None,
            };
        }

        if let Some(cached) = self.cache.get(text, language) {
            return Translated {
                text: cached,
                error: None,
            };
        }

        match self.translator.translate(text, language) {
            Ok(translated) => {
                self.cache.set(text, language, translated.clone());
                Translated {
                    text: translated,
                    error: None,
                }
            }
            Err(e) => Translated {
                text: text.to_string(),
                error: Some(e),
            },
        }
    }

    pub fn translate_all(&mut self, texts: &[&str], language: &str) -> Vec<String> {
        texts
            .iter()
            .map(|text| self.translate(text, language))
            .collect()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}
