//! Subcommand implementations, kept free of terminal I/O for testing

use crate::error::TelemetryError;
use hvac_status::Hvac;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};
use trip_statistics::{Interval, StatisticsFormatter, UnitOptions};

/// Read a raw API payload from a JSON file
pub fn read_payload(path: &Path) -> Result<Value, TelemetryError> {
    let text = std::fs::read_to_string(path).map_err(|source| TelemetryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Normalize raw statistics and render them as pretty JSON
pub fn format_statistics(
    raw: &Value,
    interval: Interval,
    units: UnitOptions,
) -> Result<String, TelemetryError> {
    let stats = StatisticsFormatter::new(raw, interval, units)?;
    if stats.is_empty() {
        warn!("Statistics payload was empty, nothing to format");
    } else {
        info!(
            "Formatted {} {} period(s) in {} units",
            stats.as_list().len(),
            stats.interval(),
            units.target_system()
        );
    }
    Ok(serde_json::to_string_pretty(stats.as_list())?)
}

/// Render an HVAC payload as a dictionary literal, or as JSON
pub fn describe_hvac(raw: &Value, legacy: bool, json: bool) -> Result<String, TelemetryError> {
    let hvac = Hvac::from_raw(raw, legacy)?;
    if json {
        Ok(serde_json::to_string_pretty(&hvac)?)
    } else {
        Ok(hvac.to_string())
    }
}
