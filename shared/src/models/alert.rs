//! Crop alert models

use serde::{Deserialize, Serialize};

/// What part of crop care an alert concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Irrigation,
    Pest,
    Disease,
    Harvest,
    Planting,
    Protection,
}

/// Alert severity, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// A crop alert produced by one fired rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAlert {
    /// Slug of the rule that fired
    pub id: String,
    pub crop_type: String,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub timeframe: String,
    pub weather_condition: String,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Irrigation => "irrigation",
            AlertType::Pest => "pest",
            AlertType::Disease => "disease",
            AlertType::Harvest => "harvest",
            AlertType::Planting => "planting",
            AlertType::Protection => "protection",
        }
    }
}

impl AlertSeverity {
    /// Numeric rank, 0 for low up to 3 for critical
    pub fn rank(&self) -> u8 {
        match self {
            AlertSeverity::Low => 0,
            AlertSeverity::Medium => 1,
            AlertSeverity::High => 2,
            AlertSeverity::Critical => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Irrigation => write!(f, "Irrigation"),
            AlertType::Pest => write!(f, "Pest"),
            AlertType::Disease => write!(f, "Disease"),
            AlertType::Harvest => write!(f, "Harvest"),
            AlertType::Planting => write!(f, "Planting"),
            AlertType::Protection => write!(f, "Protection"),
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "Low"),
            AlertSeverity::Medium => write!(f, "Medium"),
            AlertSeverity::High => write!(f, "High"),
            AlertSeverity::Critical => write!(f, "Critical"),
        }
    }
}
