//! WebAssembly module for the Farm Weather Advisor
//!
//! Runs the rule engine in the browser. Every export takes and returns
//! JSON strings in the camelCase shape of the shared models:
//! - Condition classification
//! - Crop recommendations and alerts
//! - Full snapshot analysis
//! - Chat answers

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::analysis::{analyze, classify, generate_alerts, recommend};
use shared::chat::answer_question;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(concat!(
        "farm-weather-advisor ",
        env!("CARGO_PKG_VERSION")
    )));
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn analyze_json(snapshot_json: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot")?;
    to_json(&analyze(&snapshot))
}

fn classify_json(current_json: &str) -> Result<String, String> {
    let current: CurrentConditions = parse(current_json, "current conditions")?;
    to_json(&classify(&current))
}

fn recommendations_json(snapshot_json: &str, conditions_json: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot")?;
    let conditions: FarmingConditions = parse(conditions_json, "conditions")?;
    to_json(&recommend(&snapshot, &conditions))
}

fn alerts_json(snapshot_json: &str, conditions_json: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot")?;
    let conditions: FarmingConditions = parse(conditions_json, "conditions")?;
    to_json(&generate_alerts(&snapshot, &conditions))
}

fn answer_json(question: &str, snapshot_json: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot")?;
    let conditions = classify(&snapshot.current);
    Ok(answer_question(question, &snapshot, &conditions))
}

fn validate_json(snapshot_json: &str) -> Result<(), String> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot")?;
    validate_snapshot(&snapshot).map_err(|e| e.to_string())
}

/// Classify, recommend and alert in one call
#[wasm_bindgen]
pub fn analyze_weather(snapshot_json: &str) -> Result<String, JsValue> {
    analyze_json(snapshot_json).map_err(to_js)
}

/// Classify the current reading of a snapshot
#[wasm_bindgen]
pub fn analyze_farming_conditions(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot: WeatherSnapshot = parse(snapshot_json, "snapshot").map_err(to_js)?;
    to_json(&classify(&snapshot.current)).map_err(to_js)
}

/// Classify a bare current-conditions record
#[wasm_bindgen]
pub fn classify_current_conditions(current_json: &str) -> Result<String, JsValue> {
    classify_json(current_json).map_err(to_js)
}

#[wasm_bindgen]
pub fn generate_crop_recommendations(
    snapshot_json: &str,
    conditions_json: &str,
) -> Result<String, JsValue> {
    recommendations_json(snapshot_json, conditions_json).map_err(to_js)
}

#[wasm_bindgen]
pub fn generate_crop_alerts(snapshot_json: &str, conditions_json: &str) -> Result<String, JsValue> {
    alerts_json(snapshot_json, conditions_json).map_err(to_js)
}

/// Answer a free-text farming question
#[wasm_bindgen]
pub fn answer_farming_question(question: &str, snapshot_json: &str) -> Result<String, JsValue> {
    answer_json(question, snapshot_json).map_err(to_js)
}

/// Validate a snapshot before analysis
#[wasm_bindgen]
pub fn validate_weather_snapshot(snapshot_json: &str) -> Result<(), JsValue> {
    validate_json(snapshot_json).map_err(to_js)
}

/// Quick check for frost risk from a single temperature reading
#[wasm_bindgen]
pub fn is_frost_risk(temperature_celsius: f64) -> bool {
    let temp = Decimal::try_from(temperature_celsius).unwrap_or(Decimal::ZERO);
    temp <= Decimal::from(5)
}
