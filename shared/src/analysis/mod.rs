//! Weather rule engine
//!
//! A snapshot is classified once, then the classification and the snapshot
//! feed two independent rule tables: crop recommendations and crop alerts.
//! Every rule is a `(predicate, builder)` pair evaluated in table order and
//! contributes at most one record. Rules never suppress each other, so
//! overlapping rules routinely fire together.

mod alerts;
mod conditions;
mod recommendations;
mod window;

pub use alerts::{alert_rule_ids, generate_alerts, ALERT_RULES};
pub use conditions::classify;
pub use recommendations::{recommend, recommendation_rule_ids, RECOMMENDATION_RULES};
pub use window::{ForecastWindow, WindowPair};

use serde::{Deserialize, Serialize};

use crate::models::{
    AlertSeverity, AlertType, CropAlert, CropRecommendation, CurrentConditions,
    FarmingConditions, WeatherSnapshot,
};

/// Everything a rule predicate or builder may read
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub conditions: &'a FarmingConditions,
    pub window: ForecastWindow<'a>,
}

impl<'a> RuleContext<'a> {
    pub fn new(snapshot: &'a WeatherSnapshot, conditions: &'a FarmingConditions) -> Self {
        Self {
            snapshot,
            conditions,
            window: ForecastWindow::from_snapshot(snapshot),
        }
    }

    pub fn current(&self) -> &'a CurrentConditions {
        &self.snapshot.current
    }
}

/// One entry of a rule table
pub struct Rule<T> {
    /// Stable slug identifying the rule
    pub id: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub build: fn(&RuleContext<'_>) -> T,
}

pub type AlertRule = Rule<CropAlert>;
pub type RecommendationRule = Rule<CropRecommendation>;

impl<T> Rule<T> {
    /// Build the record if the predicate holds
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<T> {
        if (self.applies)(ctx) {
            Some((self.build)(ctx))
        } else {
            None
        }
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// Evaluate a rule table in order
pub fn evaluate_rules<T>(rules: &[Rule<T>], ctx: &RuleContext<'_>) -> Vec<T> {
    rules.iter().filter_map(|rule| rule.evaluate(ctx)).collect()
}

/// Ids of the rules in a table that fire for this context
pub fn fired_rule_ids<T>(rules: &[Rule<T>], ctx: &RuleContext<'_>) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.id)
        .collect()
}

/// Full analysis of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmAnalysis {
    pub conditions: FarmingConditions,
    pub recommendations: Vec<CropRecommendation>,
    pub alerts: Vec<CropAlert>,
}

impl FarmAnalysis {
    /// Most severe alert, `None` when nothing fired
    pub fn highest_severity(&self) -> Option<AlertSeverity> {
        self.alerts.iter().map(|a| a.severity).max()
    }

    pub fn alerts_of_type(&self, alert_type: AlertType) -> impl Iterator<Item = &CropAlert> {
        self.alerts.iter().filter(move |a| a.alert_type == alert_type)
    }

    pub fn has_alert(&self, id: &str) -> bool {
        self.alerts.iter().any(|a| a.id == id)
    }
}

/// Classify the snapshot once and run both generators on the result
pub fn analyze(snapshot: &WeatherSnapshot) -> FarmAnalysis {
    let conditions = classify(&snapshot.current);
    let recommendations = recommend(snapshot, &conditions);
    let alerts = generate_alerts(snapshot, &conditions);

    FarmAnalysis {
        conditions,
        recommendations,
        alerts,
    }
}
