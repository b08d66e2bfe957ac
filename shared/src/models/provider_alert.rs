//! Weather alerts issued by the provider
//!
//! These ride along on the snapshot for display. The rule engine never
//! reads them; crop alerts are derived from the readings alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider weather alert, kept in the provider's own wording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAlert {
    pub headline: String,
    pub event: String,
    /// Provider severity label, e.g. "Severe" or "Minor"
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert() -> ProviderAlert {
        ProviderAlert {
            headline: "Frost Warning".to_string(),
            event: "Frost Warning".to_string(),
            severity: "Severe".to_string(),
            urgency: None,
            certainty: None,
            category: None,
            areas: None,
            description: "Frost expected overnight.".to_string(),
            instruction: None,
            effective: None,
            expires: None,
        }
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_value(alert()).unwrap();
        assert_eq!(json["headline"], "Frost Warning");
        assert_eq!(json["description"], "Frost expected overnight.");
        assert!(json.get("urgency").is_none());
        assert!(json.get("expires").is_none());
    }
}
