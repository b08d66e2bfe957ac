//! Validation utilities for weather snapshots
//!
//! Hosts validate a snapshot before analysis. The rule engine itself
//! accepts any snapshot and never calls into this module.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CurrentConditions, DailyForecast, WeatherSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Invalid current conditions: {0}")]
    Current(&'static str),
    #[error("Invalid forecast day {index}: {reason}")]
    ForecastDay { index: usize, reason: &'static str },
    #[error("Forecast must include at least today")]
    EmptyForecast,
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate relative humidity is a percentage
pub fn validate_humidity(humidity_percent: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity_percent) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

pub fn validate_precipitation(precipitation_mm: Decimal) -> Result<(), &'static str> {
    if precipitation_mm < Decimal::ZERO {
        return Err("Precipitation cannot be negative");
    }
    Ok(())
}

pub fn validate_wind_speed(wind_kph: Decimal) -> Result<(), &'static str> {
    if wind_kph < Decimal::ZERO {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

pub fn validate_uv_index(uv_index: Decimal) -> Result<(), &'static str> {
    if uv_index < Decimal::ZERO {
        return Err("UV index cannot be negative");
    }
    Ok(())
}

/// Validate daily minimum does not exceed daily maximum
pub fn validate_temperature_range(min: Decimal, max: Decimal) -> Result<(), &'static str> {
    if min > max {
        return Err("Minimum temperature exceeds maximum temperature");
    }
    Ok(())
}

// ============================================================================
// Snapshot Validations
// ============================================================================

pub fn validate_current(current: &CurrentConditions) -> Result<(), &'static str> {
    validate_humidity(current.humidity_percent)?;
    validate_precipitation(current.precipitation_mm)?;
    validate_wind_speed(current.wind_speed_kph)?;
    validate_uv_index(current.uv_index)
}

pub fn validate_forecast_day(day: &DailyForecast) -> Result<(), &'static str> {
    validate_humidity(day.avg_humidity_percent)?;
    validate_precipitation(day.total_precip_mm)?;
    validate_wind_speed(day.max_wind_kph)?;
    validate_temperature_range(day.min_temp_celsius, day.max_temp_celsius)
}

/// Validate a full snapshot, reporting the first problem found
pub fn validate_snapshot(snapshot: &WeatherSnapshot) -> Result<(), SnapshotError> {
    validate_current(&snapshot.current).map_err(SnapshotError::Current)?;

    if snapshot.forecast_days.is_empty() {
        return Err(SnapshotError::EmptyForecast);
    }

    for (index, day) in snapshot.forecast_days.iter().enumerate() {
        validate_forecast_day(day).map_err(|reason| SnapshotError::ForecastDay { index, reason })?;
    }

    Ok(())
}
