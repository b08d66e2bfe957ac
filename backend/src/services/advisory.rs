//! Advisory service
//!
//! Drives one analysis run: fetch a snapshot from the configured source,
//! validate it, run the rule engine and assemble the report.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::analysis::{
    analyze, fired_rule_ids, FarmAnalysis, RuleContext, ALERT_RULES, RECOMMENDATION_RULES,
};
use shared::chat::answer_question;
use shared::models::{AlertSeverity, AlertType, ProviderAlert, WeatherSnapshot};
use shared::types::{GpsCoordinates, SnapshotLocation};
use shared::validation::validate_snapshot;

use crate::config::{SourceConfig, SourceKind};
use crate::error::{AppError, AppResult};
use crate::external::{FileWeatherSource, MockWeatherSource, WeatherSource};

/// Report written by the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryReport {
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SnapshotLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_severity: Option<AlertSeverity>,
    pub analysis: FarmAnalysis,
    /// Alerts issued by the weather provider, shown next to the crop alerts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provider_alerts: Vec<ProviderAlert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

pub struct AdvisoryService {
    source: Box<dyn WeatherSource>,
}

impl AdvisoryService {
    pub fn new(source: Box<dyn WeatherSource>) -> Self {
        Self { source }
    }

    /// Build the service for the configured source
    pub fn from_config(config: &SourceConfig) -> AppResult<Self> {
        let source: Box<dyn WeatherSource> = match config.kind {
            SourceKind::Mock => Box::new(MockWeatherSource::new(
                config.seed,
                config.location_name.clone(),
                GpsCoordinates::new(
                    Decimal::from_f64(config.latitude).unwrap_or_default(),
                    Decimal::from_f64(config.longitude).unwrap_or_default(),
                ),
            )),
            SourceKind::File => {
                let path = config.path.as_deref().ok_or_else(|| {
                    AppError::Configuration("source.path is required for the file source".into())
                })?;
                Box::new(FileWeatherSource::new(path))
            }
        };

        tracing::info!("Using {} weather source", source.name());
        Ok(Self::new(source))
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch, validate and analyze one snapshot
    pub fn run(&self, question: Option<&str>) -> AppResult<AdvisoryReport> {
        let snapshot = self.source.fetch()?;
        self.report(snapshot, question)
    }

    /// Validate and analyze an already fetched snapshot
    pub fn report(
        &self,
        snapshot: WeatherSnapshot,
        question: Option<&str>,
    ) -> AppResult<AdvisoryReport> {
        if let Err(e) = validate_snapshot(&snapshot) {
            tracing::warn!("Rejected weather snapshot: {}", e);
            return Err(e.into());
        }

        let analysis = analyze(&snapshot);
        log_fired_rules(&snapshot, &analysis);

        let answer = question.map(|q| answer_question(q, &snapshot, &analysis.conditions));

        if !snapshot.provider_alerts.is_empty() {
            tracing::info!(
                count = snapshot.provider_alerts.len(),
                "Provider issued weather alerts"
            );
        }

        Ok(AdvisoryReport {
            source: self.source.name(),
            location: snapshot.location,
            fetched_at: snapshot.fetched_at,
            highest_severity: analysis.highest_severity(),
            analysis,
            provider_alerts: snapshot.provider_alerts,
            answer,
        })
    }
}

fn log_fired_rules(snapshot: &WeatherSnapshot, analysis: &FarmAnalysis) {
    tracing::info!(
        recommendations = analysis.recommendations.len(),
        alerts = analysis.alerts.len(),
        protection_alerts = analysis.alerts_of_type(AlertType::Protection).count(),
        "Analysis complete"
    );

    let ctx = RuleContext::new(snapshot, &analysis.conditions);
    for id in fired_rule_ids(RECOMMENDATION_RULES, &ctx) {
        tracing::debug!(rule = id, "Recommendation rule fired");
    }
    for id in fired_rule_ids(ALERT_RULES, &ctx) {
        tracing::debug!(rule = id, "Alert rule fired");
    }
}
