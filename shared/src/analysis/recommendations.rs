//! Crop recommendations
//!
//! Six independent rules, emitted in table order. The order is relied on
//! for display, so no sorting by priority happens afterwards.

use rust_decimal::Decimal;

use super::conditions::within;
use super::{evaluate_rules, RecommendationRule, Rule, RuleContext};
use crate::models::{
    CropRecommendation, FarmingConditions, FieldWorkSuitability, Priority, RiskLevel,
    SoilMoisture, WeatherSnapshot,
};

pub static RECOMMENDATION_RULES: &[RecommendationRule] = &[
    Rule {
        id: "irrigation",
        applies: |ctx| ctx.conditions.irrigation_needed,
        build: |_| {
            recommendation(
                "All Crops",
                "Increase Irrigation",
                Priority::High,
                "Dry conditions detected. Increase watering frequency to prevent crop stress.",
                "Immediate - Early morning or evening",
            )
        },
    },
    Rule {
        id: "pest-monitoring",
        applies: |ctx| ctx.conditions.pest_risk == RiskLevel::High,
        build: |_| {
            recommendation(
                "Vegetables & Fruits",
                "Monitor for Pests",
                Priority::Medium,
                "High temperature and humidity create favorable conditions for pest activity.",
                "Daily monitoring recommended",
            )
        },
    },
    Rule {
        id: "disease-prevention",
        applies: |ctx| ctx.conditions.disease_risk == RiskLevel::High,
        build: |_| {
            recommendation(
                "All Crops",
                "Disease Prevention",
                Priority::Medium,
                "High humidity increases fungal disease risk. Ensure good air circulation.",
                "Apply preventive treatments now",
            )
        },
    },
    Rule {
        id: "planting",
        applies: |ctx| {
            within(ctx.current().temperature_celsius, 15, 25)
                && ctx.conditions.soil_moisture == SoilMoisture::Optimal
        },
        build: |_| {
            recommendation(
                "Spring Crops",
                "Optimal Planting Time",
                Priority::High,
                "Perfect conditions for planting lettuce, spinach, peas, and other cool-season crops.",
                "Next 2-3 days",
            )
        },
    },
    Rule {
        id: "harvest",
        applies: |ctx| {
            ctx.conditions.field_work_suitability == FieldWorkSuitability::Excellent
                && ctx.current().precipitation_mm.is_zero()
        },
        build: |_| {
            recommendation(
                "Ready Crops",
                "Harvest Operations",
                Priority::High,
                "Excellent field conditions for harvesting. Dry weather ensures good crop quality.",
                "Today and tomorrow",
            )
        },
    },
    Rule {
        id: "frost-protection",
        applies: |ctx| {
            ctx.window
                .tomorrow
                .is_some_and(|day| day.min_temp_celsius < Decimal::from(5))
        },
        build: |_| {
            recommendation(
                "Sensitive Plants",
                "Frost Protection",
                Priority::High,
                "Prepare frost protection measures for temperature-sensitive crops.",
                "Before sunset today",
            )
        },
    },
];

fn recommendation(
    crop_type: &str,
    action: &str,
    priority: Priority,
    description: &str,
    timing: &str,
) -> CropRecommendation {
    CropRecommendation {
        crop_type: crop_type.to_string(),
        action: action.to_string(),
        priority,
        description: description.to_string(),
        timing: timing.to_string(),
    }
}

/// Generate crop recommendations for a snapshot and its classification
pub fn recommend(
    snapshot: &WeatherSnapshot,
    conditions: &FarmingConditions,
) -> Vec<CropRecommendation> {
    evaluate_rules(RECOMMENDATION_RULES, &RuleContext::new(snapshot, conditions))
}

pub fn recommendation_rule_ids() -> Vec<&'static str> {
    RECOMMENDATION_RULES.iter().map(|rule| rule.id).collect()
}
