//! Vehicle Telemetry CLI
//!
//! File-driven front end over the statistics and HVAC normalizers.

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub mod commands;
mod error;
pub mod settings;

pub use error::TelemetryError;
pub use settings::{AppConfig, LoggingConfig};

/// Initialize logging. Output goes to stderr so stdout stays parseable.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let level = Level::from_str(&config.level)
        .map_err(|_| TelemetryError::InvalidLogLevel(config.level.clone()))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
