//! Condition classification
//!
//! Maps the current reading onto categorical farming conditions. Every
//! field is a threshold ladder evaluated top to bottom, first match wins,
//! so each reading lands in exactly one bucket.

use rust_decimal::Decimal;

use crate::models::{
    CurrentConditions, FarmingConditions, FieldWorkSuitability, GrowingConditions, RiskLevel,
    SoilMoisture,
};

/// Inclusive range check on both ends
pub(crate) fn within(value: Decimal, low: i64, high: i64) -> bool {
    value >= Decimal::from(low) && value <= Decimal::from(high)
}

/// Classify the current reading into farming conditions
pub fn classify(current: &CurrentConditions) -> FarmingConditions {
    let soil_moisture = soil_moisture(current);
    let temp = current.temperature_celsius;
    let humidity = current.humidity_percent;

    // Irrigation is needed on dry soil, or when it's hot with dry air
    let irrigation_needed =
        soil_moisture == SoilMoisture::Dry || (temp > Decimal::from(25) && humidity < 50);

    FarmingConditions {
        soil_moisture,
        growing_conditions: growing_conditions(current),
        pest_risk: pest_risk(current),
        disease_risk: disease_risk(current),
        irrigation_needed,
        field_work_suitability: field_work_suitability(current, soil_moisture),
    }
}

fn soil_moisture(current: &CurrentConditions) -> SoilMoisture {
    let precipitation = current.precipitation_mm;
    let humidity = current.humidity_percent;

    if precipitation > Decimal::from(5) || humidity > 80 {
        SoilMoisture::Wet
    } else if precipitation < Decimal::ONE && humidity < 40 {
        SoilMoisture::Dry
    } else {
        SoilMoisture::Optimal
    }
}

fn growing_conditions(current: &CurrentConditions) -> GrowingConditions {
    let temp = current.temperature_celsius;
    let humidity = current.humidity_percent;

    if within(temp, 15, 25) && (50..=70).contains(&humidity) {
        GrowingConditions::Excellent
    } else if within(temp, 10, 30) && (40..=80).contains(&humidity) {
        GrowingConditions::Good
    } else if within(temp, 5, 35) {
        GrowingConditions::Fair
    } else {
        GrowingConditions::Poor
    }
}

fn pest_risk(current: &CurrentConditions) -> RiskLevel {
    let temp = current.temperature_celsius;
    let humidity = current.humidity_percent;

    if temp > Decimal::from(20) && humidity > 60 {
        RiskLevel::High
    } else if temp > Decimal::from(15) && humidity > 50 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn disease_risk(current: &CurrentConditions) -> RiskLevel {
    let temp = current.temperature_celsius;
    let humidity = current.humidity_percent;

    if humidity > 70 && temp > Decimal::from(15) {
        RiskLevel::High
    } else if humidity > 60 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn field_work_suitability(
    current: &CurrentConditions,
    soil_moisture: SoilMoisture,
) -> FieldWorkSuitability {
    let precipitation = current.precipitation_mm;
    let wind = current.wind_speed_kph;

    if precipitation > Decimal::from(10) || wind > Decimal::from(30) {
        FieldWorkSuitability::Unsuitable
    } else if precipitation > Decimal::from(5)
        || wind > Decimal::from(20)
        || soil_moisture == SoilMoisture::Wet
    {
        FieldWorkSuitability::Poor
    } else if precipitation > Decimal::from(2) || wind > Decimal::from(15) {
        FieldWorkSuitability::Fair
    } else if wind < Decimal::from(10) && soil_moisture == SoilMoisture::Optimal {
        FieldWorkSuitability::Excellent
    } else {
        FieldWorkSuitability::Good
    }
}
