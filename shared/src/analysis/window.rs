//! 48-hour look-ahead over tomorrow and the day after
//!
//! Only days that are actually present contribute. A missing day is never
//! read as zero rain or zero wind, so it cannot satisfy a "low" threshold.

use rust_decimal::Decimal;

use crate::models::{DailyForecast, WeatherSnapshot};

/// Forecast days 1 and 2 of a snapshot
#[derive(Debug, Clone, Copy)]
pub struct ForecastWindow<'a> {
    pub tomorrow: Option<&'a DailyForecast>,
    pub day_after: Option<&'a DailyForecast>,
}

/// Both look-ahead days, for rules that need the full window
#[derive(Debug, Clone, Copy)]
pub struct WindowPair<'a> {
    pub tomorrow: &'a DailyForecast,
    pub day_after: &'a DailyForecast,
}

impl<'a> ForecastWindow<'a> {
    pub fn from_snapshot(snapshot: &'a WeatherSnapshot) -> Self {
        Self {
            tomorrow: snapshot.tomorrow(),
            day_after: snapshot.day_after(),
        }
    }

    /// Present days, tomorrow first
    pub fn days(&self) -> impl Iterator<Item = &'a DailyForecast> {
        self.tomorrow.into_iter().chain(self.day_after)
    }

    pub fn is_empty(&self) -> bool {
        self.tomorrow.is_none() && self.day_after.is_none()
    }

    pub fn both_days(&self) -> Option<WindowPair<'a>> {
        match (self.tomorrow, self.day_after) {
            (Some(tomorrow), Some(day_after)) => Some(WindowPair { tomorrow, day_after }),
            _ => None,
        }
    }

    /// Summed precipitation of the present days
    pub fn total_precip_mm(&self) -> Option<Decimal> {
        if self.is_empty() {
            return None;
        }
        Some(self.days().map(|d| d.total_precip_mm).sum())
    }

    pub fn peak_max_temp(&self) -> Option<Decimal> {
        self.days().map(|d| d.max_temp_celsius).max()
    }

    pub fn peak_max_wind(&self) -> Option<Decimal> {
        self.days().map(|d| d.max_wind_kph).max()
    }

    /// Minimum temperatures of the present days
    pub fn min_temps(&self) -> impl Iterator<Item = Decimal> + 'a {
        self.days().map(|d| d.min_temp_celsius)
    }
}

impl WindowPair<'_> {
    pub fn total_precip_mm(&self) -> Decimal {
        self.tomorrow.total_precip_mm + self.day_after.total_precip_mm
    }

    pub fn mean_avg_temp(&self) -> Decimal {
        (self.tomorrow.avg_temp_celsius + self.day_after.avg_temp_celsius) / Decimal::TWO
    }

    pub fn mean_avg_humidity(&self) -> Decimal {
        Decimal::from(self.tomorrow.avg_humidity_percent + self.day_after.avg_humidity_percent)
            / Decimal::TWO
    }

    pub fn mean_max_wind(&self) -> Decimal {
        (self.tomorrow.max_wind_kph + self.day_after.max_wind_kph) / Decimal::TWO
    }

    pub fn peak_max_wind(&self) -> Decimal {
        self.tomorrow.max_wind_kph.max(self.day_after.max_wind_kph)
    }
}
