//! Legacy HVAC payload, still returned by some older models

use crate::error::HvacError;
use crate::readings::{decode, field, payload, HvacReadings};
use crate::repr;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Climate control status in the older PascalCase payload shape.
///
/// Blower and defogger states are the raw status codes (0 = off).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LegacyHvac {
    current_temperature: Option<Number>,
    target_temperature: Option<Number>,
    blower_on: Option<Number>,
    front_defogger_on: Option<Number>,
    rear_defogger_on: Option<Number>,
    last_updated: Option<String>,
}

impl LegacyHvac {
    pub fn from_raw(raw: &Value) -> Result<Self, HvacError> {
        let raw = payload(raw)?;

        Ok(Self {
            current_temperature: decode(&raw, "InsideTemperature"),
            target_temperature: decode(&raw, "SettingTemperature"),
            blower_on: decode(&raw, "BlowerStatus"),
            front_defogger_on: decode(&raw, "FrontDefoggerStatus"),
            rear_defogger_on: decode(&raw, "RearDefoggerStatus"),
            last_updated: decode(&raw, "LatestAcStartTime"),
        })
    }

    pub fn blower_on(&self) -> Option<&Number> {
        self.blower_on.as_ref()
    }

    pub fn front_defogger_on(&self) -> Option<&Number> {
        self.front_defogger_on.as_ref()
    }

    pub fn rear_defogger_on(&self) -> Option<&Number> {
        self.rear_defogger_on.as_ref()
    }
}

impl HvacReadings for LegacyHvac {
    fn current_temperature(&self) -> Option<&Number> {
        self.current_temperature.as_ref()
    }

    fn target_temperature(&self) -> Option<&Number> {
        self.target_temperature.as_ref()
    }

    fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    fn is_legacy(&self) -> bool {
        true
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut dict = Map::with_capacity(6);
        dict.insert("current_temperature".into(), field(&self.current_temperature));
        dict.insert("target_temperature".into(), field(&self.target_temperature));
        dict.insert("blower_on".into(), field(&self.blower_on));
        dict.insert("front_defogger_on".into(), field(&self.front_defogger_on));
        dict.insert("rear_defogger_on".into(), field(&self.rear_defogger_on));
        dict.insert("last_updated".into(), field(&self.last_updated));
        dict
    }
}

impl fmt::Display for LegacyHvac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        repr::write_dict(f, &self.as_dict())
    }
}
