//! Farm Weather Advisor - command-line host
//!
//! Obtains a weather snapshot from the configured source, runs the farming
//! rule engine over it and prints the report as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod services;

pub use config::Config;

use error::AppError;
use services::AdvisoryService;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fwa_advisor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return report_failure(e.into());
        }
    };

    tracing::info!("Starting Farm Weather Advisor");
    tracing::info!("Environment: {}", config.environment);

    let service = match AdvisoryService::from_config(&config.source) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(code = e.code(), "Failed to set up weather source: {}", e);
            return report_failure(e);
        }
    };

    let report = match service.run(config.chat.question.as_deref()) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                code = e.code(),
                source = service.source_name(),
                "Analysis failed: {}",
                e
            );
            return report_failure(e);
        }
    };

    if let Some(severity) = report.highest_severity {
        tracing::info!("Highest alert severity: {}", severity);
    }

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}

/// Print the error report on stdout and exit non-zero
fn report_failure(e: AppError) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&e.report())?);
    Err(e.into())
}
