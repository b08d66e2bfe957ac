//! Crop alerts
//!
//! Two rule families share one table. Current-instant rules read the
//! present reading and its classification. Look-ahead rules read tomorrow
//! and the day after through [`ForecastWindow`], and skip any day the
//! forecast does not include.
//!
//! Severity ladders that must stay mutually exclusive (heavy vs moderate
//! rain, heat wave vs high temperature) are split into disjoint bands.
//! Everything else may fire together, frost-critical and frost-warning
//! included.

use rust_decimal::Decimal;

use super::conditions::within;
use super::window::ForecastWindow;
use super::{evaluate_rules, AlertRule, Rule, RuleContext};
use crate::models::{
    AlertSeverity, AlertType, CropAlert, FarmingConditions, FieldWorkSuitability,
    GrowingConditions, RiskLevel, SoilMoisture, WeatherSnapshot,
};

const HEAVY_RAIN_MM: i64 = 50;
const MODERATE_RAIN_MM: i64 = 25;
const HEAT_WAVE_C: i64 = 35;
const HIGH_TEMP_C: i64 = 30;
const STRONG_WIND_KPH: i64 = 40;

/// Fixed text of one alert
struct AlertText {
    id: &'static str,
    crop_type: &'static str,
    alert_type: AlertType,
    severity: AlertSeverity,
    title: &'static str,
    description: &'static str,
    recommendation: &'static str,
    timeframe: &'static str,
    weather_condition: &'static str,
}

impl AlertText {
    fn alert(&self) -> CropAlert {
        self.alert_with(self.description.to_string())
    }

    fn alert_with(&self, description: String) -> CropAlert {
        CropAlert {
            id: self.id.to_string(),
            crop_type: self.crop_type.to_string(),
            alert_type: self.alert_type,
            severity: self.severity,
            title: self.title.to_string(),
            description,
            recommendation: self.recommendation.to_string(),
            timeframe: self.timeframe.to_string(),
            weather_condition: self.weather_condition.to_string(),
        }
    }
}

// ============================================================================
// Current-instant alerts
// ============================================================================

const DROUGHT_SEVERE: AlertText = AlertText {
    id: "drought-severe",
    crop_type: "All Crops",
    alert_type: AlertType::Irrigation,
    severity: AlertSeverity::High,
    title: "Severe Drought Stress",
    description: "Extremely dry conditions with high temperatures are causing severe plant stress.",
    recommendation: "Implement emergency irrigation. Apply mulch to conserve moisture. Consider shade cloth for sensitive crops.",
    timeframe: "Immediate action required",
    weather_condition: "Hot and dry",
};

const PEST_OUTBREAK: AlertText = AlertText {
    id: "pest-outbreak",
    crop_type: "Vegetables & Fruits",
    alert_type: AlertType::Pest,
    severity: AlertSeverity::Medium,
    title: "High Pest Activity Risk",
    description: "Warm, humid conditions are ideal for rapid pest reproduction.",
    recommendation: "Inspect crops daily. Apply organic pest control measures. Consider beneficial insect releases.",
    timeframe: "Monitor for next 5-7 days",
    weather_condition: "Warm and humid",
};

const DISEASE_RISK: AlertText = AlertText {
    id: "disease-risk",
    crop_type: "All Crops",
    alert_type: AlertType::Disease,
    severity: AlertSeverity::Medium,
    title: "Fungal Disease Risk",
    description: "High humidity creates perfect conditions for fungal diseases.",
    recommendation: "Improve air circulation around plants. Apply preventive fungicide if needed. Avoid overhead watering.",
    timeframe: "Next 3-5 days",
    weather_condition: "High humidity",
};

const OPTIMAL_PLANTING: AlertText = AlertText {
    id: "optimal-planting",
    crop_type: "Seasonal Crops",
    alert_type: AlertType::Planting,
    severity: AlertSeverity::Low,
    title: "Perfect Planting Conditions",
    description: "Ideal weather conditions for planting and transplanting.",
    recommendation: "Plant cool-season crops like lettuce, spinach, peas. Transplant seedlings. Prepare soil for upcoming plantings.",
    timeframe: "Next 2-3 days",
    weather_condition: "Mild and optimal",
};

// ============================================================================
// Look-ahead alerts
// ============================================================================

const FROST_CRITICAL: AlertText = AlertText {
    id: "frost-critical",
    crop_type: "All Sensitive Crops",
    alert_type: AlertType::Protection,
    severity: AlertSeverity::Critical,
    title: "Critical Frost Warning",
    description: "Temperatures below 2°C will damage or kill most crops.",
    recommendation: "Immediately cover crops with frost cloth, use heaters, or harvest what you can. Move potted plants indoors.",
    timeframe: "Next 12 hours",
    weather_condition: "Freezing temperatures",
};

const FROST_WARNING: AlertText = AlertText {
    id: "frost-warning",
    crop_type: "Frost-Sensitive Crops",
    alert_type: AlertType::Protection,
    severity: AlertSeverity::High,
    title: "Frost Warning",
    description: "Temperatures between 2°C and 5°C in the next 48 hours can damage tender plants.",
    recommendation: "Cover sensitive plants with frost cloth or row covers before sunset. Water the soil during the day to hold heat. Delay transplanting seedlings.",
    timeframe: "Next 48 hours",
    weather_condition: "Near-freezing temperatures",
};

const HEAVY_RAIN: AlertText = AlertText {
    id: "heavy-rain",
    crop_type: "All Crops",
    alert_type: AlertType::Protection,
    severity: AlertSeverity::High,
    title: "Heavy Rainfall Expected",
    description: "Heavy rain expected over the next 48 hours. Risk of waterlogging and soil erosion.",
    recommendation: "Clear drainage channels and furrows. Postpone fertilizer and pesticide applications. Harvest mature crops before the rain.",
    timeframe: "Next 48 hours",
    weather_condition: "Heavy rain",
};

const MODERATE_RAIN: AlertText = AlertText {
    id: "moderate-rain",
    crop_type: "All Crops",
    alert_type: AlertType::Irrigation,
    severity: AlertSeverity::Medium,
    title: "Moderate Rainfall Expected",
    description: "Moderate rain expected over the next 48 hours will supply natural irrigation.",
    recommendation: "Reduce or pause irrigation. Delay spraying until after the rain. Check field drainage.",
    timeframe: "Next 48 hours",
    weather_condition: "Rain",
};

const HEAT_WAVE: AlertText = AlertText {
    id: "heat-wave",
    crop_type: "All Crops",
    alert_type: AlertType::Protection,
    severity: AlertSeverity::High,
    title: "Heat Wave Warning",
    description: "Extreme heat expected. Severe heat stress can cause flower drop and sunscald.",
    recommendation: "Irrigate in the early morning or evening. Use shade cloth for sensitive crops. Apply mulch to keep roots cool.",
    timeframe: "Next 48 hours",
    weather_condition: "Extreme heat",
};

const HIGH_TEMPERATURE: AlertText = AlertText {
    id: "high-temperature",
    crop_type: "Vegetables & Fruits",
    alert_type: AlertType::Irrigation,
    severity: AlertSeverity::Medium,
    title: "High Temperature Advisory",
    description: "Hot weather expected. Crops will need more water.",
    recommendation: "Increase irrigation frequency. Avoid transplanting during the hottest hours. Watch for wilting.",
    timeframe: "Next 48 hours",
    weather_condition: "Hot",
};

const STRONG_WIND: AlertText = AlertText {
    id: "strong-wind",
    crop_type: "Tall & Staked Crops",
    alert_type: AlertType::Protection,
    severity: AlertSeverity::High,
    title: "Strong Wind Warning",
    description: "Strong winds expected. Risk of lodging and damage to structures.",
    recommendation: "Stake or support tall plants. Secure greenhouses, row covers and equipment. Avoid spraying.",
    timeframe: "Next 48 hours",
    weather_condition: "Strong winds",
};

const DROUGHT_DEVELOPING: AlertText = AlertText {
    id: "drought-developing",
    crop_type: "All Crops",
    alert_type: AlertType::Irrigation,
    severity: AlertSeverity::Medium,
    title: "Developing Drought Conditions",
    description: "Little rain, high temperatures and dry air are forecast for the next two days.",
    recommendation: "Plan the irrigation schedule now. Apply mulch to conserve soil moisture. Prioritize water for crops at flowering stage.",
    timeframe: "Next 48 hours",
    weather_condition: "Hot and dry",
};

const PLANTING_WINDOW: AlertText = AlertText {
    id: "planting-window",
    crop_type: "Seasonal Crops",
    alert_type: AlertType::Planting,
    severity: AlertSeverity::Low,
    title: "Favorable Planting Window",
    description: "Mild temperatures, moderate humidity and light rain are forecast for the next two days.",
    recommendation: "Sow seeds and transplant seedlings. Light rain will help them establish.",
    timeframe: "Next 48 hours",
    weather_condition: "Mild with light rain",
};

const HARVEST_WINDOW: AlertText = AlertText {
    id: "harvest-window",
    crop_type: "Ready Crops",
    alert_type: AlertType::Harvest,
    severity: AlertSeverity::Low,
    title: "Harvest Opportunity",
    description: "Dry, calm weather is forecast for the next two days.",
    recommendation: "Schedule harvesting of mature crops. Dry weather keeps crop quality high and fields accessible.",
    timeframe: "Next 48 hours",
    weather_condition: "Dry and calm",
};

const DISEASE_FORECAST: AlertText = AlertText {
    id: "disease-forecast",
    crop_type: "All Crops",
    alert_type: AlertType::Disease,
    severity: AlertSeverity::Medium,
    title: "Disease Risk Forecast",
    description: "Warm, humid and wet weather over the next two days favors fungal and bacterial diseases.",
    recommendation: "Apply preventive fungicide before the rain. Improve air circulation. Avoid overhead watering.",
    timeframe: "Next 48 hours",
    weather_condition: "Warm and humid",
};

// ============================================================================
// Rule table
// ============================================================================

pub static ALERT_RULES: &[AlertRule] = &[
    Rule {
        id: DROUGHT_SEVERE.id,
        applies: |ctx| {
            ctx.conditions.soil_moisture == SoilMoisture::Dry
                && ctx.current().temperature_celsius > Decimal::from(30)
        },
        build: |_| DROUGHT_SEVERE.alert(),
    },
    Rule {
        id: PEST_OUTBREAK.id,
        applies: |ctx| {
            ctx.conditions.pest_risk == RiskLevel::High
                && ctx.current().temperature_celsius > Decimal::from(25)
        },
        build: |_| PEST_OUTBREAK.alert(),
    },
    Rule {
        id: DISEASE_RISK.id,
        applies: |ctx| {
            ctx.conditions.disease_risk == RiskLevel::High && ctx.current().humidity_percent > 75
        },
        build: |_| DISEASE_RISK.alert(),
    },
    Rule {
        id: OPTIMAL_PLANTING.id,
        applies: |ctx| {
            ctx.conditions.growing_conditions == GrowingConditions::Excellent
                && ctx.conditions.field_work_suitability == FieldWorkSuitability::Excellent
        },
        build: |_| OPTIMAL_PLANTING.alert(),
    },
    Rule {
        id: FROST_CRITICAL.id,
        applies: |ctx| {
            let freezing = Decimal::from(2);
            ctx.current().temperature_celsius < freezing
                || ctx.window.min_temps().any(|t| t < freezing)
        },
        build: |_| FROST_CRITICAL.alert(),
    },
    Rule {
        id: FROST_WARNING.id,
        applies: |ctx| ctx.window.min_temps().any(|t| within(t, 2, 5)),
        build: |ctx| {
            let lowest = ctx
                .window
                .min_temps()
                .filter(|t| within(*t, 2, 5))
                .min()
                .unwrap_or(Decimal::from(5));
            FROST_WARNING.alert_with(format!(
                "Lows down to {}°C expected in the next 48 hours can damage tender plants.",
                lowest.round_dp(1)
            ))
        },
    },
    Rule {
        id: HEAVY_RAIN.id,
        applies: |ctx| rain_band(&ctx.window) == Some(AlertSeverity::High),
        build: |ctx| match ctx.window.total_precip_mm() {
            Some(total) => HEAVY_RAIN.alert_with(format!(
                "{}mm of rain expected over the next 48 hours. Risk of waterlogging and soil erosion.",
                total.round_dp(1)
            )),
            None => HEAVY_RAIN.alert(),
        },
    },
    Rule {
        id: MODERATE_RAIN.id,
        applies: |ctx| rain_band(&ctx.window) == Some(AlertSeverity::Medium),
        build: |ctx| match ctx.window.total_precip_mm() {
            Some(total) => MODERATE_RAIN.alert_with(format!(
                "{}mm of rain expected over the next 48 hours will supply natural irrigation.",
                total.round_dp(1)
            )),
            None => MODERATE_RAIN.alert(),
        },
    },
    Rule {
        id: HEAT_WAVE.id,
        applies: |ctx| heat_band(&ctx.window) == Some(AlertSeverity::High),
        build: |ctx| match ctx.window.peak_max_temp() {
            Some(peak) => HEAT_WAVE.alert_with(format!(
                "Temperatures up to {}°C expected. Severe heat stress can cause flower drop and sunscald.",
                peak.round_dp(1)
            )),
            None => HEAT_WAVE.alert(),
        },
    },
    Rule {
        id: HIGH_TEMPERATURE.id,
        applies: |ctx| heat_band(&ctx.window) == Some(AlertSeverity::Medium),
        build: |ctx| match ctx.window.peak_max_temp() {
            Some(peak) => HIGH_TEMPERATURE.alert_with(format!(
                "Temperatures up to {}°C expected. Crops will need more water.",
                peak.round_dp(1)
            )),
            None => HIGH_TEMPERATURE.alert(),
        },
    },
    Rule {
        id: STRONG_WIND.id,
        applies: |ctx| {
            ctx.window
                .peak_max_wind()
                .is_some_and(|wind| wind > Decimal::from(STRONG_WIND_KPH))
        },
        build: |ctx| match ctx.window.peak_max_wind() {
            Some(peak) => STRONG_WIND.alert_with(format!(
                "Wind speeds up to {} km/h expected. Risk of lodging and damage to structures.",
                peak.round_dp(1)
            )),
            None => STRONG_WIND.alert(),
        },
    },
    Rule {
        id: DROUGHT_DEVELOPING.id,
        // A missing day must not read as 0mm, so both days are required
        applies: |ctx| {
            ctx.window.both_days().is_some_and(|pair| {
                let hot = Decimal::from(28);
                let peak = pair.tomorrow.max_temp_celsius.max(pair.day_after.max_temp_celsius);
                pair.total_precip_mm() < Decimal::TWO
                    && peak > hot
                    && pair.mean_avg_humidity() < Decimal::from(40)
            })
        },
        build: |_| DROUGHT_DEVELOPING.alert(),
    },
    Rule {
        id: PLANTING_WINDOW.id,
        applies: |ctx| {
            ctx.window.both_days().is_some_and(|pair| {
                let rain = pair.total_precip_mm();
                within(pair.mean_avg_temp(), 15, 25)
                    && within(pair.mean_avg_humidity(), 50, 70)
                    && pair.peak_max_wind() < Decimal::from(20)
                    && rain > Decimal::from(5)
                    && rain < Decimal::from(20)
            })
        },
        build: |_| PLANTING_WINDOW.alert(),
    },
    Rule {
        id: HARVEST_WINDOW.id,
        applies: |ctx| {
            ctx.window.both_days().is_some_and(|pair| {
                pair.total_precip_mm() < Decimal::ONE && pair.mean_max_wind() < Decimal::from(15)
            })
        },
        build: |_| HARVEST_WINDOW.alert(),
    },
    Rule {
        id: DISEASE_FORECAST.id,
        applies: |ctx| {
            ctx.window.both_days().is_some_and(|pair| {
                pair.mean_avg_humidity() > Decimal::from(80)
                    && pair.mean_avg_temp() > Decimal::from(20)
                    && pair.total_precip_mm() > Decimal::from(10)
            })
        },
        build: |_| DISEASE_FORECAST.alert(),
    },
];

/// Rainfall severity over the window, highest band first
fn rain_band(window: &ForecastWindow<'_>) -> Option<AlertSeverity> {
    let total = window.total_precip_mm()?;
    if total > Decimal::from(HEAVY_RAIN_MM) {
        Some(AlertSeverity::High)
    } else if total > Decimal::from(MODERATE_RAIN_MM) {
        Some(AlertSeverity::Medium)
    } else {
        None
    }
}

/// Heat severity over the window, highest band first
fn heat_band(window: &ForecastWindow<'_>) -> Option<AlertSeverity> {
    let peak = window.peak_max_temp()?;
    if peak > Decimal::from(HEAT_WAVE_C) {
        Some(AlertSeverity::High)
    } else if peak > Decimal::from(HIGH_TEMP_C) {
        Some(AlertSeverity::Medium)
    } else {
        None
    }
}

/// Generate crop alerts for a snapshot and its classification
pub fn generate_alerts(
    snapshot: &WeatherSnapshot,
    conditions: &FarmingConditions,
) -> Vec<CropAlert> {
    evaluate_rules(ALERT_RULES, &RuleContext::new(snapshot, conditions))
}

pub fn alert_rule_ids() -> Vec<&'static str> {
    ALERT_RULES.iter().map(|rule| rule.id).collect()
}
