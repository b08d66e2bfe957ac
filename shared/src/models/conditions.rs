//! Farming condition models

use serde::{Deserialize, Serialize};

/// Soil moisture estimate from recent precipitation and humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilMoisture {
    Dry,
    Optimal,
    Wet,
}

/// Overall growing conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowingConditions {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Pest or disease risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// How suitable the field is for machinery and manual work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWorkSuitability {
    Unsuitable,
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Categorical snapshot of farming conditions, derived from the current reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmingConditions {
    pub soil_moisture: SoilMoisture,
    pub growing_conditions: GrowingConditions,
    pub pest_risk: RiskLevel,
    pub disease_risk: RiskLevel,
    pub irrigation_needed: bool,
    pub field_work_suitability: FieldWorkSuitability,
}

impl SoilMoisture {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilMoisture::Dry => "dry",
            SoilMoisture::Optimal => "optimal",
            SoilMoisture::Wet => "wet",
        }
    }
}

impl GrowingConditions {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowingConditions::Poor => "poor",
            GrowingConditions::Fair => "fair",
            GrowingConditions::Good => "good",
            GrowingConditions::Excellent => "excellent",
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl FieldWorkSuitability {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldWorkSuitability::Unsuitable => "unsuitable",
            FieldWorkSuitability::Poor => "poor",
            FieldWorkSuitability::Fair => "fair",
            FieldWorkSuitability::Good => "good",
            FieldWorkSuitability::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for SoilMoisture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilMoisture::Dry => write!(f, "Dry"),
            SoilMoisture::Optimal => write!(f, "Optimal"),
            SoilMoisture::Wet => write!(f, "Wet"),
        }
    }
}

impl std::fmt::Display for GrowingConditions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowingConditions::Poor => write!(f, "Poor"),
            GrowingConditions::Fair => write!(f, "Fair"),
            GrowingConditions::Good => write!(f, "Good"),
            GrowingConditions::Excellent => write!(f, "Excellent"),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::fmt::Display for FieldWorkSuitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldWorkSuitability::Unsuitable => write!(f, "Unsuitable"),
            FieldWorkSuitability::Poor => write!(f, "Poor"),
            FieldWorkSuitability::Fair => write!(f, "Fair"),
            FieldWorkSuitability::Good => write!(f, "Good"),
            FieldWorkSuitability::Excellent => write!(f, "Excellent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_serialize_to_wire_values() {
        let conditions = FarmingConditions {
            soil_moisture: SoilMoisture::Optimal,
            growing_conditions: GrowingConditions::Excellent,
            pest_risk: RiskLevel::Medium,
            disease_risk: RiskLevel::Low,
            irrigation_needed: false,
            field_work_suitability: FieldWorkSuitability::Unsuitable,
        };

        let json = serde_json::to_value(conditions).unwrap();
        assert_eq!(json["soilMoisture"], "optimal");
        assert_eq!(json["growingConditions"], "excellent");
        assert_eq!(json["pestRisk"], "medium");
        assert_eq!(json["diseaseRisk"], "low");
        assert_eq!(json["irrigationNeeded"], false);
        assert_eq!(json["fieldWorkSuitability"], "unsuitable");
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SoilMoisture::Wet.to_string(), "Wet");
        assert_eq!(FieldWorkSuitability::Unsuitable.to_string(), "Unsuitable");
        assert_eq!(RiskLevel::High.as_str(), "high");
    }

    #[test]
    fn test_suitability_ordering() {
        assert!(FieldWorkSuitability::Excellent > FieldWorkSuitability::Good);
        assert!(FieldWorkSuitability::Poor > FieldWorkSuitability::Unsuitable);
        assert!(RiskLevel::High > RiskLevel::Medium);
    }
}
