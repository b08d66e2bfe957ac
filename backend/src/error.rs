//! Error handling for the Farm Weather Advisor host
//!
//! Every variant maps to a stable error code so failures can be reported
//! as structured JSON as well as log lines.

use serde::Serialize;
use thiserror::Error;

use shared::validation::SnapshotError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Weather source errors
    #[error("Weather data not found: {0}")]
    WeatherDataNotFound(String),

    #[error("Failed to read weather data: {0}")]
    WeatherDataUnreadable(#[from] std::io::Error),

    #[error("Malformed weather data: {0}")]
    MalformedWeatherData(#[from] serde_json::Error),

    // Validation errors
    #[error("Invalid weather snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error report structure
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::WeatherDataNotFound(_) => "WEATHER_DATA_NOT_FOUND",
            AppError::WeatherDataUnreadable(_) => "WEATHER_DATA_UNREADABLE",
            AppError::MalformedWeatherData(_) => "MALFORMED_WEATHER_DATA",
            AppError::InvalidSnapshot(_) => "INVALID_SNAPSHOT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias for the host pipeline
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AppError::Configuration("x".into()).code(), "CONFIGURATION_ERROR");
        assert_eq!(
            AppError::from(SnapshotError::EmptyForecast).code(),
            "INVALID_SNAPSHOT"
        );
    }

    #[test]
    fn test_report_carries_message() {
        let report = AppError::from(SnapshotError::EmptyForecast).report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["error"]["code"], "INVALID_SNAPSHOT");
        assert_eq!(
            json["error"]["message"],
            "Invalid weather snapshot: Forecast must include at least today"
        );
    }

    #[test]
    fn test_malformed_json_converts() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "MALFORMED_WEATHER_DATA");
    }
}
