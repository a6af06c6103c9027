//! Shape-selected HVAC status

use crate::error::HvacError;
use crate::legacy::LegacyHvac;
use crate::modern::ModernHvac;
use crate::readings::HvacReadings;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;
use tracing::debug;

/// HVAC status in whichever payload shape the vehicle reported
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Hvac {
    Modern(ModernHvac),
    Legacy(LegacyHvac),
}

impl Hvac {
    /// Read `raw` as the legacy shape if `legacy` is set, else as the modern one
    pub fn from_raw(raw: &Value, legacy: bool) -> Result<Self, HvacError> {
        debug!("Reading {} HVAC payload", if legacy { "legacy" } else { "modern" });
        if legacy {
            LegacyHvac::from_raw(raw).map(Hvac::Legacy)
        } else {
            ModernHvac::from_raw(raw).map(Hvac::Modern)
        }
    }

    pub fn modern(raw: &Value) -> Result<Self, HvacError> {
        Self::from_raw(raw, false)
    }

    pub fn legacy(raw: &Value) -> Result<Self, HvacError> {
        Self::from_raw(raw, true)
    }

    pub fn as_modern(&self) -> Option<&ModernHvac> {
        match self {
            Hvac::Modern(hvac) => Some(hvac),
            Hvac::Legacy(_) => None,
        }
    }

    pub fn as_legacy(&self) -> Option<&LegacyHvac> {
        match self {
            Hvac::Legacy(hvac) => Some(hvac),
            Hvac::Modern(_) => None,
        }
    }

    fn readings(&self) -> &dyn HvacReadings {
        match self {
            Hvac::Modern(hvac) => hvac as &dyn HvacReadings,
            Hvac::Legacy(hvac) => hvac as &dyn HvacReadings,
        }
    }
}

impl HvacReadings for Hvac {
    fn current_temperature(&self) -> Option<&Number> {
        self.readings().current_temperature()
    }

    fn target_temperature(&self) -> Option<&Number> {
        self.readings().target_temperature()
    }

    fn last_updated(&self) -> Option<&str> {
        self.readings().last_updated()
    }

    fn is_legacy(&self) -> bool {
        matches!(self, Hvac::Legacy(_))
    }

    fn as_dict(&self) -> Map<String, Value> {
        self.readings().as_dict()
    }
}

impl fmt::Display for Hvac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hvac::Modern(hvac) => fmt::Display::fmt(hvac, f),
            Hvac::Legacy(hvac) => fmt::Display::fmt(hvac, f),
        }
    }
}
