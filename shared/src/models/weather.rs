//! Weather snapshot models
//!
//! A snapshot is the normalized shape handed over by whichever collaborator
//! fetched or generated the weather. The analysis code only reads it.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProviderAlert;
use crate::types::SnapshotLocation;

/// Index of tomorrow in `forecast_days` (0 = today)
pub const TOMORROW: usize = 1;

/// Index of the day after tomorrow in `forecast_days`
pub const DAY_AFTER: usize = 2;

/// Current weather reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    /// Recent precipitation
    pub precipitation_mm: Decimal,
    pub wind_speed_kph: Decimal,
    pub uv_index: Decimal,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub max_temp_celsius: Decimal,
    pub min_temp_celsius: Decimal,
    pub avg_temp_celsius: Decimal,
    pub total_precip_mm: Decimal,
    pub max_wind_kph: Decimal,
    pub avg_humidity_percent: i32,
}

/// Current reading plus up to seven forecast days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    /// Ordered daily forecast, index 0 is today
    #[serde(default)]
    pub forecast_days: Vec<DailyForecast>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SnapshotLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    /// Alerts issued by the provider, passed through for display
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_alerts: Vec<ProviderAlert>,
}

impl WeatherSnapshot {
    pub fn new(current: CurrentConditions, forecast_days: Vec<DailyForecast>) -> Self {
        Self {
            current,
            forecast_days,
            location: None,
            fetched_at: None,
            provider_alerts: Vec::new(),
        }
    }

    pub fn today(&self) -> Option<&DailyForecast> {
        self.forecast_days.first()
    }

    pub fn tomorrow(&self) -> Option<&DailyForecast> {
        self.forecast_days.get(TOMORROW)
    }

    pub fn day_after(&self) -> Option<&DailyForecast> {
        self.forecast_days.get(DAY_AFTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(min: i64, max: i64) -> DailyForecast {
        DailyForecast {
            date: None,
            max_temp_celsius: Decimal::from(max),
            min_temp_celsius: Decimal::from(min),
            avg_temp_celsius: Decimal::from((min + max) / 2),
            total_precip_mm: Decimal::ZERO,
            max_wind_kph: Decimal::from(10),
            avg_humidity_percent: 60,
        }
    }

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: Decimal::from(20),
            humidity_percent: 60,
            precipitation_mm: Decimal::ZERO,
            wind_speed_kph: Decimal::from(8),
            uv_index: Decimal::from(4),
        }
    }

    #[test]
    fn test_forecast_day_accessors() {
        let snapshot =
            WeatherSnapshot::new(current(), vec![day(10, 20), day(11, 21), day(12, 22)]);
        assert_eq!(snapshot.today().map(|d| d.min_temp_celsius), Some(Decimal::from(10)));
        assert_eq!(snapshot.tomorrow().map(|d| d.min_temp_celsius), Some(Decimal::from(11)));
        assert_eq!(snapshot.day_after().map(|d| d.min_temp_celsius), Some(Decimal::from(12)));
    }

    #[test]
    fn test_short_forecast_has_no_lookahead_days() {
        let snapshot = WeatherSnapshot::new(current(), vec![day(10, 20)]);
        assert!(snapshot.tomorrow().is_none());
        assert!(snapshot.day_after().is_none());
    }

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let json = r#"{
            "current": {
                "temperatureCelsius": 21.5,
                "humidityPercent": 65,
                "precipitationMm": 0,
                "windSpeedKph": 5,
                "uvIndex": 3
            },
            "forecastDays": [{
                "date": "2026-10-19",
                "maxTempCelsius": 25,
                "minTempCelsius": 12,
                "avgTempCelsius": 18.5,
                "totalPrecipMm": 1.2,
                "maxWindKph": 14,
                "avgHumidityPercent": 60
            }]
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.current.temperature_celsius, Decimal::new(215, 1));
        assert_eq!(snapshot.forecast_days.len(), 1);
        assert!(snapshot.location.is_none());
        assert!(snapshot.provider_alerts.is_empty());
        assert_eq!(
            snapshot.today().and_then(|d| d.date),
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
    }
}
