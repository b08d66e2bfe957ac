//! Synthetic weather source for demos and offline runs
//!
//! Draws a plausible current reading and seven forecast days from a seeded
//! RNG, so one seed always yields the same weather. Provider-style alerts
//! are derived from the current reading the way a provider would issue them.

use chrono::{DateTime, Days, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use shared::models::{CurrentConditions, DailyForecast, ProviderAlert, WeatherSnapshot};
use shared::types::{GpsCoordinates, SnapshotLocation};

use super::weather::WeatherSource;
use crate::error::AppResult;

pub const FORECAST_DAYS: u64 = 7;

#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    seed: u64,
    location_name: String,
    coordinates: GpsCoordinates,
}

impl MockWeatherSource {
    pub fn new(seed: u64, location_name: impl Into<String>, coordinates: GpsCoordinates) -> Self {
        Self {
            seed,
            location_name: location_name.into(),
            coordinates,
        }
    }

    /// Generate the snapshot as issued at `issued`; its date is forecast day 0
    pub fn generate(&self, issued: DateTime<Utc>) -> WeatherSnapshot {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let today = issued.date_naive();

        let temp = rng.gen_range(18.0..33.0);
        let humidity: f64 = rng.gen_range(45.0..85.0);
        let wind = rng.gen_range(5.0..25.0);
        let precip = if humidity > 75.0 { rng.gen_range(0.0..5.0) } else { 0.0 };
        let uv: i64 = rng.gen_range(1..=9);

        let current = CurrentConditions {
            temperature_celsius: tenths(temp),
            humidity_percent: humidity.round() as i32,
            precipitation_mm: tenths(precip),
            wind_speed_kph: tenths(wind),
            uv_index: Decimal::from(uv),
        };

        let forecast_days = (0..FORECAST_DAYS)
            .map(|offset| {
                let day_temp = rng.gen_range(15.0..35.0);
                let day_humidity: f64 = rng.gen_range(40.0..90.0);
                let day_precip = if day_humidity > 70.0 { rng.gen_range(0.0..10.0) } else { 0.0 };
                let max_wind = wind + rng.gen_range(0.0..10.0);

                DailyForecast {
                    date: today.checked_add_days(Days::new(offset)),
                    max_temp_celsius: tenths(day_temp + 5.0),
                    min_temp_celsius: tenths(day_temp - 5.0),
                    avg_temp_celsius: tenths(day_temp),
                    total_precip_mm: tenths(day_precip),
                    max_wind_kph: tenths(max_wind),
                    avg_humidity_percent: day_humidity.round() as i32,
                }
            })
            .collect();

        let provider_alerts = farming_alerts(&current, issued);

        WeatherSnapshot {
            current,
            forecast_days,
            location: Some(SnapshotLocation {
                name: Some(self.location_name.clone()),
                coordinates: self.coordinates.clone(),
            }),
            fetched_at: Some(issued),
            provider_alerts,
        }
    }
}

fn tenths(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(1)
}

/// Text of one provider-style alert
struct IssuedAlert {
    headline: &'static str,
    event: &'static str,
    severity: &'static str,
    urgency: &'static str,
    certainty: &'static str,
    valid_hours: i64,
    description: &'static str,
    instruction: &'static str,
}

impl IssuedAlert {
    fn issue(&self, issued: DateTime<Utc>) -> ProviderAlert {
        ProviderAlert {
            headline: self.headline.to_string(),
            event: self.event.to_string(),
            severity: self.severity.to_string(),
            urgency: Some(self.urgency.to_string()),
            certainty: Some(self.certainty.to_string()),
            category: Some("Agricultural".to_string()),
            areas: Some("All farming areas".to_string()),
            description: self.description.to_string(),
            instruction: Some(self.instruction.to_string()),
            effective: Some(issued),
            expires: Some(issued + Duration::hours(self.valid_hours)),
        }
    }
}

const FROST: IssuedAlert = IssuedAlert {
    headline: "Frost Warning - Protect Your Crops",
    event: "Frost Warning",
    severity: "Severe",
    urgency: "Immediate",
    certainty: "Likely",
    valid_hours: 12,
    description: "Temperatures are expected to drop below 5°C, which may damage sensitive crops.",
    instruction: "Cover sensitive plants with frost cloth or plastic sheeting. Move potted plants indoors and harvest temperature-sensitive crops.",
};

const HIGH_WIND: IssuedAlert = IssuedAlert {
    headline: "High Wind Advisory - Secure Farm Equipment",
    event: "High Wind Advisory",
    severity: "Moderate",
    urgency: "Expected",
    certainty: "Likely",
    valid_hours: 8,
    description: "Strong winds may damage crops, greenhouses and farm structures.",
    instruction: "Secure loose equipment and check greenhouse structures. Avoid spraying until winds subside.",
};

const DROUGHT: IssuedAlert = IssuedAlert {
    headline: "Drought Conditions - Increase Irrigation",
    event: "Drought Advisory",
    severity: "Moderate",
    urgency: "Expected",
    certainty: "Observed",
    valid_hours: 72,
    description: "Low humidity and high temperatures are creating drought-like conditions.",
    instruction: "Increase irrigation frequency and apply mulch to retain soil moisture.",
};

const PLANTING: IssuedAlert = IssuedAlert {
    headline: "Optimal Planting Conditions",
    event: "Favorable Conditions",
    severity: "Minor",
    urgency: "Future",
    certainty: "Observed",
    valid_hours: 24,
    description: "Current weather conditions are ideal for planting and field operations.",
    instruction: "Good conditions for sowing seeds, transplanting seedlings and general field work.",
};

/// Provider-style alerts for a current reading
pub fn farming_alerts(current: &CurrentConditions, issued: DateTime<Utc>) -> Vec<ProviderAlert> {
    let temp = current.temperature_celsius;
    let humidity = current.humidity_percent;
    let wind = current.wind_speed_kph;
    let mild = temp >= Decimal::from(15) && temp <= Decimal::from(25);

    let checks = [
        (temp < Decimal::from(5), &FROST),
        (wind > Decimal::from(25), &HIGH_WIND),
        (humidity < 40 && temp > Decimal::from(25), &DROUGHT),
        (mild && (50..=70).contains(&humidity) && wind < Decimal::from(15), &PLANTING),
    ];

    checks
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, alert)| alert.issue(issued))
        .collect()
}

impl WeatherSource for MockWeatherSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch(&self) -> AppResult<WeatherSnapshot> {
        Ok(self.generate(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use proptest::prelude::*;

    fn source(seed: u64) -> MockWeatherSource {
        MockWeatherSource::new(
            seed,
            "Demo Farm",
            GpsCoordinates::new(Decimal::new(187883, 4), Decimal::new(989853, 4)),
        )
    }

    fn day_one() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 6, 0, 0).unwrap()
    }

    fn reading(temp: i64, humidity: i32, wind: i64) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: Decimal::from(temp),
            humidity_percent: humidity,
            precipitation_mm: Decimal::ZERO,
            wind_speed_kph: Decimal::from(wind),
            uv_index: Decimal::from(3),
        }
    }

    fn events(current: &CurrentConditions) -> Vec<String> {
        farming_alerts(current, day_one())
            .into_iter()
            .map(|a| a.event)
            .collect()
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        assert_eq!(source(7).generate(day_one()), source(7).generate(day_one()));
        assert_ne!(source(7).generate(day_one()), source(8).generate(day_one()));
    }

    #[test]
    fn test_seven_dated_days() {
        let snapshot = source(1).generate(day_one());
        assert_eq!(snapshot.forecast_days.len(), 7);
        assert_eq!(snapshot.forecast_days[0].date, Some(day_one().date_naive()));
        assert_eq!(snapshot.forecast_days[6].date, NaiveDate::from_ymd_opt(2024, 6, 16));
    }

    #[test]
    fn test_farming_alert_thresholds() {
        assert_eq!(events(&reading(4, 60, 10)), vec!["Frost Warning"]);
        assert_eq!(events(&reading(5, 60, 10)), Vec::<String>::new());
        assert_eq!(events(&reading(12, 60, 26)), vec!["High Wind Advisory"]);
        assert_eq!(events(&reading(26, 39, 10)), vec!["Drought Advisory"]);
        assert_eq!(events(&reading(25, 39, 10)), Vec::<String>::new());
        assert_eq!(events(&reading(20, 60, 10)), vec!["Favorable Conditions"]);
        assert_eq!(events(&reading(20, 60, 15)), Vec::<String>::new());
    }

    #[test]
    fn test_overlapping_farming_alerts_keep_order() {
        assert_eq!(
            events(&reading(3, 30, 30)),
            vec!["Frost Warning", "High Wind Advisory"]
        );
    }

    #[test]
    fn test_farming_alerts_expire_after_validity() {
        let alerts = farming_alerts(&reading(2, 60, 10), day_one());
        assert_eq!(alerts[0].severity, "Severe");
        assert_eq!(alerts[0].effective, Some(day_one()));
        assert_eq!(alerts[0].expires, Some(day_one() + Duration::hours(12)));
    }

    #[test]
    fn test_generated_snapshot_carries_alerts() {
        let snapshot = source(7).generate(day_one());
        assert_eq!(snapshot.fetched_at, Some(day_one()));
        assert_eq!(
            snapshot.provider_alerts,
            farming_alerts(&snapshot.current, day_one())
        );
    }

    #[test]
    fn test_fetch_stamps_time() {
        let snapshot = source(3).fetch().unwrap();
        assert!(snapshot.fetched_at.is_some());
        assert_eq!(
            snapshot.location.and_then(|l| l.name).as_deref(),
            Some("Demo Farm")
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_generated_snapshot_is_valid(seed in any::<u64>()) {
            let snapshot = source(seed).generate(day_one());
            prop_assert!(shared::validation::validate_snapshot(&snapshot).is_ok());

            let c = &snapshot.current;
            prop_assert!(
                c.temperature_celsius >= Decimal::from(18)
                    && c.temperature_celsius <= Decimal::from(33)
            );
            prop_assert!((45..=85).contains(&c.humidity_percent));
            if c.humidity_percent < 75 {
                prop_assert!(c.precipitation_mm.is_zero());
            }
            for day in &snapshot.forecast_days {
                prop_assert!(day.min_temp_celsius <= day.max_temp_celsius);
                prop_assert!(day.max_wind_kph >= c.wind_speed_kph - Decimal::new(1, 1));
            }
        }
    }
}
