//! Weather sources
//!
//! A source produces one [`WeatherSnapshot`]. The file source reads a
//! WeatherAPI `forecast.json` document saved to disk and normalizes it into
//! the snapshot model.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::models::{CurrentConditions, DailyForecast, ProviderAlert, WeatherSnapshot};
use shared::types::{GpsCoordinates, SnapshotLocation};

use crate::error::{AppError, AppResult};

/// Anything that can produce a weather snapshot
pub trait WeatherSource {
    /// Short label for logs
    fn name(&self) -> &'static str;

    fn fetch(&self) -> AppResult<WeatherSnapshot>;
}

/// Reads a provider forecast document from disk
#[derive(Debug, Clone)]
pub struct FileWeatherSource {
    path: PathBuf,
}

impl FileWeatherSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WeatherSource for FileWeatherSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> AppResult<WeatherSnapshot> {
        if !self.path.exists() {
            return Err(AppError::WeatherDataNotFound(self.path.display().to_string()));
        }
        let body = std::fs::read_to_string(&self.path)?;
        parse_forecast_document(&body)
    }
}

/// WeatherAPI forecast.json response
#[derive(Debug, Deserialize)]
struct WapiForecastResponse {
    location: Option<WapiLocation>,
    current: WapiCurrent,
    forecast: WapiForecast,
    #[serde(default)]
    alerts: Option<WapiAlerts>,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: Option<String>,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    last_updated_epoch: Option<i64>,
    temp_c: f64,
    humidity: f64,
    #[serde(default)]
    precip_mm: f64,
    wind_kph: f64,
    #[serde(default)]
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    #[serde(default)]
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    date: Option<String>,
    day: WapiDay,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
    #[serde(default)]
    totalprecip_mm: f64,
    maxwind_kph: f64,
    avghumidity: f64,
}

#[derive(Debug, Deserialize)]
struct WapiAlerts {
    #[serde(default)]
    alert: Vec<WapiAlert>,
}

/// Every field may be an empty string
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WapiAlert {
    headline: String,
    severity: String,
    urgency: String,
    areas: String,
    category: String,
    certainty: String,
    event: String,
    effective: String,
    expires: String,
    desc: String,
    instruction: String,
}

/// Parse a WeatherAPI forecast document into a snapshot
pub fn parse_forecast_document(body: &str) -> AppResult<WeatherSnapshot> {
    let data: WapiForecastResponse = serde_json::from_str(body)?;
    Ok(convert_forecast_response(data))
}

fn decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().normalize()
}

fn percent(value: f64) -> i32 {
    value.round() as i32
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn convert_alert(alert: WapiAlert) -> ProviderAlert {
    ProviderAlert {
        effective: timestamp(&alert.effective),
        expires: timestamp(&alert.expires),
        headline: alert.headline,
        event: alert.event,
        severity: alert.severity,
        urgency: non_empty(alert.urgency),
        certainty: non_empty(alert.certainty),
        category: non_empty(alert.category),
        areas: non_empty(alert.areas),
        description: alert.desc,
        instruction: non_empty(alert.instruction),
    }
}

fn convert_forecast_response(data: WapiForecastResponse) -> WeatherSnapshot {
    let current = CurrentConditions {
        temperature_celsius: decimal(data.current.temp_c),
        humidity_percent: percent(data.current.humidity),
        precipitation_mm: decimal(data.current.precip_mm),
        wind_speed_kph: decimal(data.current.wind_kph),
        uv_index: decimal(data.current.uv),
    };

    let forecast_days = data
        .forecast
        .forecastday
        .into_iter()
        .map(|item| DailyForecast {
            date: item
                .date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            max_temp_celsius: decimal(item.day.maxtemp_c),
            min_temp_celsius: decimal(item.day.mintemp_c),
            avg_temp_celsius: decimal(item.day.avgtemp_c),
            total_precip_mm: decimal(item.day.totalprecip_mm),
            max_wind_kph: decimal(item.day.maxwind_kph),
            avg_humidity_percent: percent(item.day.avghumidity),
        })
        .collect();

    WeatherSnapshot {
        current,
        forecast_days,
        location: data.location.map(|l| SnapshotLocation {
            name: l.name,
            coordinates: GpsCoordinates::new(decimal(l.lat), decimal(l.lon)),
        }),
        fetched_at: data
            .current
            .last_updated_epoch
            .and_then(|epoch| DateTime::from_timestamp(epoch, 0)),
        provider_alerts: data
            .alerts
            .map(|a| a.alert.into_iter().map(convert_alert).collect())
            .unwrap_or_default(),
    }
}
