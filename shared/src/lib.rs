//! Shared core of the Farm Weather Advisor
//!
//! Weather snapshot model, the condition/recommendation/alert rule engine,
//! and the small collaborators around it (chat responder, translation
//! cache, snapshot validation). Used by the backend host and, through
//! WASM, by the browser.

pub mod analysis;
pub mod chat;
pub mod models;
pub mod translation;
pub mod types;
pub mod validation;

pub use analysis::{analyze, classify, generate_alerts, recommend, FarmAnalysis};
pub use chat::answer_question;
pub use models::*;
pub use types::*;
pub use validation::*;
