//! CLI Error Types

use hvac_status::HvacError;
use std::path::PathBuf;
use thiserror::Error;
use trip_statistics::StatisticsError;

/// Errors surfaced by the command line front end
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to install logger: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Statistics(#[from] StatisticsError),

    #[error(transparent)]
    Hvac(#[from] HvacError),
}
