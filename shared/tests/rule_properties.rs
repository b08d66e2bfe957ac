//! Rule engine property tests
//!
//! Classifier ladders and generator invariants over randomized snapshots.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::analysis::{alert_rule_ids, recommendation_rule_ids};
use shared::{
    analyze, classify, generate_alerts, recommend, CurrentConditions, DailyForecast,
    GrowingConditions, ProviderAlert, SoilMoisture, WeatherSnapshot,
};

const LOOKAHEAD_ALERTS: &[&str] = &[
    "frost-warning",
    "heavy-rain",
    "moderate-rain",
    "heat-wave",
    "high-temperature",
    "strong-wind",
    "drought-developing",
    "planting-window",
    "harvest-window",
    "disease-forecast",
];

fn temperature_strategy() -> impl Strategy<Value = Decimal> {
    (-100i64..=450i64).prop_map(|n| Decimal::new(n, 1)) // -10.0 to 45.0°C
}

fn humidity_strategy() -> impl Strategy<Value = i32> {
    0..=100i32
}

fn precipitation_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=600i64).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 60.0mm
}

fn wind_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=600i64).prop_map(|n| Decimal::new(n, 1)) // 0.0 to 60.0 km/h
}

prop_compose! {
    fn current_strategy()(
        temperature_celsius in temperature_strategy(),
        humidity_percent in humidity_strategy(),
        precipitation_mm in precipitation_strategy(),
        wind_speed_kph in wind_strategy(),
        uv in 0i64..=11i64,
    ) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius,
            humidity_percent,
            precipitation_mm,
            wind_speed_kph,
            uv_index: Decimal::from(uv),
        }
    }
}

prop_compose! {
    fn day_strategy()(
        min in temperature_strategy(),
        spread in 0i64..=200i64,
        total_precip_mm in precipitation_strategy(),
        max_wind_kph in wind_strategy(),
        avg_humidity_percent in humidity_strategy(),
    ) -> DailyForecast {
        let max = min + Decimal::new(spread, 1);
        DailyForecast {
            date: None,
            max_temp_celsius: max,
            min_temp_celsius: min,
            avg_temp_celsius: (min + max) / Decimal::TWO,
            total_precip_mm,
            max_wind_kph,
            avg_humidity_percent,
        }
    }
}

fn snapshot_strategy(max_days: usize) -> impl Strategy<Value = WeatherSnapshot> {
    (current_strategy(), prop::collection::vec(day_strategy(), 0..=max_days))
        .prop_map(|(current, days)| WeatherSnapshot::new(current, days))
}

/// True when `ids` appear in the same relative order as in `table`
fn follows_table_order(ids: &[String], table: &[&str]) -> bool {
    let mut positions = ids.iter().map(|id| table.iter().position(|t| *t == id.as_str()));
    let mut last = None;
    positions.all(|pos| match pos {
        Some(p) if last.map_or(true, |l| p > l) => {
            last = Some(p);
            true
        }
        _ => false,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ========================================================================
    // Classifier ladders
    // ========================================================================

    #[test]
    fn prop_high_humidity_is_wet(
        mut current in current_strategy(),
        humidity in 81..=100i32,
    ) {
        current.humidity_percent = humidity;
        prop_assert_eq!(classify(&current).soil_moisture, SoilMoisture::Wet);
    }

    #[test]
    fn prop_heavy_precipitation_is_wet(
        mut current in current_strategy(),
        precip in 51i64..=600i64,
    ) {
        current.precipitation_mm = Decimal::new(precip, 1);
        prop_assert_eq!(classify(&current).soil_moisture, SoilMoisture::Wet);
    }

    #[test]
    fn prop_mild_band_is_excellent(
        mut current in current_strategy(),
        temp in 150i64..=250i64,
        humidity in 50..=70i32,
    ) {
        current.temperature_celsius = Decimal::new(temp, 1);
        current.humidity_percent = humidity;
        prop_assert_eq!(classify(&current).growing_conditions, GrowingConditions::Excellent);
    }

    #[test]
    fn prop_irrigation_iff_dry_or_hot_and_dry_air(current in current_strategy()) {
        let conditions = classify(&current);
        let dry_soil = conditions.soil_moisture == SoilMoisture::Dry;
        let hot_dry_air =
            current.temperature_celsius > Decimal::from(25) && current.humidity_percent < 50;
        prop_assert_eq!(conditions.irrigation_needed, dry_soil || hot_dry_air);
    }

    // ========================================================================
    // Generators
    // ========================================================================

    #[test]
    fn prop_analysis_is_idempotent(snapshot in snapshot_strategy(7)) {
        let first = analyze(&snapshot);
        let second = analyze(&snapshot);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn prop_provider_alerts_do_not_change_analysis(snapshot in snapshot_strategy(3)) {
        let without = analyze(&snapshot);
        let mut snapshot = snapshot;
        snapshot.provider_alerts.push(ProviderAlert {
            headline: "Frost Warning - Protect Your Crops".to_string(),
            event: "Frost Warning".to_string(),
            severity: "Severe".to_string(),
            urgency: Some("Immediate".to_string()),
            certainty: None,
            category: Some("Agricultural".to_string()),
            areas: None,
            description: "Temperatures are expected to drop below 5°C.".to_string(),
            instruction: None,
            effective: None,
            expires: None,
        });
        prop_assert_eq!(analyze(&snapshot), without);
    }

    #[test]
    fn prop_short_forecast_skips_lookahead(snapshot in snapshot_strategy(1)) {
        let conditions = classify(&snapshot.current);
        let alerts = generate_alerts(&snapshot, &conditions);
        for alert in &alerts {
            prop_assert!(!LOOKAHEAD_ALERTS.contains(&alert.id.as_str()), "unexpected {}", alert.id);
        }
    }

    #[test]
    fn prop_severity_bands_are_exclusive(snapshot in snapshot_strategy(7)) {
        let analysis = analyze(&snapshot);
        prop_assert!(!(analysis.has_alert("heavy-rain") && analysis.has_alert("moderate-rain")));
        prop_assert!(!(analysis.has_alert("heat-wave") && analysis.has_alert("high-temperature")));
    }

    #[test]
    fn prop_output_follows_table_order(snapshot in snapshot_strategy(7)) {
        let conditions = classify(&snapshot.current);

        let alert_ids: Vec<String> = generate_alerts(&snapshot, &conditions)
            .into_iter()
            .map(|a| a.id)
            .collect();
        prop_assert!(follows_table_order(&alert_ids, &alert_rule_ids()));

        let recommendations = recommend(&snapshot, &conditions);
        prop_assert!(recommendations.len() <= recommendation_rule_ids().len());
        let irrigation = recommendations.iter().any(|r| r.action == "Increase Irrigation");
        prop_assert_eq!(irrigation, conditions.irrigation_needed);
    }
}
