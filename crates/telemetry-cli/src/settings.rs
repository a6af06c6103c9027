//! CLI settings
//!
//! Layered as: built-in defaults, then `vehicle-telemetry.toml` (or the file
//! given on the command line), then `VEHICLE_TELEMETRY_*` environment
//! variables, e.g. `VEHICLE_TELEMETRY_UNITS__IMPERIAL=true`.

use crate::error::TelemetryError;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trip_statistics::UnitOptions;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "vehicle-telemetry";

const ENV_PREFIX: &str = "VEHICLE_TELEMETRY";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Max level: trace, debug, info, warn or error
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default unit preferences for statistics output
    pub units: UnitOptions,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from `path` (required) or the default file (optional), plus environment
    pub fn load(path: Option<&Path>) -> Result<Self, TelemetryError> {
        let builder = match path {
            Some(path) => defaults()?.add_source(File::from(path).required(true)),
            None => defaults()?.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from TOML text over the defaults, ignoring the environment
    pub fn from_toml(toml: &str) -> Result<Self, TelemetryError> {
        let config = defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, TelemetryError> {
    let logging = LoggingConfig::default();
    Ok(Config::builder()
        .set_default("units.imperial", false)?
        .set_default("units.use_liters", false)?
        .set_default("logging.level", logging.level)?
        .set_default("logging.json", logging.json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.units.imperial);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_overrides() {
        let config = AppConfig::from_toml(
            r#"
            [units]
            imperial = true
            use_liters = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.units, UnitOptions::imperial(true));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_units_table() {
        let config = AppConfig::from_toml("[units]\nimperial = true\n").unwrap();
        assert_eq!(config.units, UnitOptions::imperial(false));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\njson = true").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/vehicle-telemetry.toml")));
        assert!(matches!(err, Err(TelemetryError::Config(_))));
    }
}
