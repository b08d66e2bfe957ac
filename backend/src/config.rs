//! Configuration management for the Farm Weather Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FWA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Where the weather snapshot comes from
    pub source: SourceConfig,

    /// Report output
    pub output: OutputConfig,

    /// Optional chat question answered after the report
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Mock,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// `mock` or `file`
    pub kind: SourceKind,

    /// Provider-shaped forecast JSON, required for `file`
    pub path: Option<String>,

    /// Seed for the synthetic generator
    pub seed: u64,

    /// Display name attached to synthetic snapshots
    pub location_name: String,

    /// Coordinates attached to synthetic snapshots
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatConfig {
    pub question: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FWA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("source.kind", "mock")?
            .set_default("source.seed", 42)?
            .set_default("source.location_name", "Demo Farm")?
            .set_default("source.latitude", 18.7883)?
            .set_default("source.longitude", 98.9853)?
            .set_default("output.pretty", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FWA_ prefix)
            .add_source(
                Environment::with_prefix("FWA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
