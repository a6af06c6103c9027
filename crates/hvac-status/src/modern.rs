//! Modern HVAC payload

use crate::error::HvacError;
use crate::readings::{decode, field, payload, HvacReadings};
use crate::repr;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Climate control status from the current remote-control API.
///
/// Temperatures keep the raw JSON number, so integer readings stay integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModernHvac {
    current_temperature: Option<Number>,
    target_temperature: Option<Number>,
    started_at: Option<String>,
    status: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    duration: Option<Number>,
    options: Option<Map<String, Value>>,
    command_id: Option<String>,
    last_updated: Option<String>,
}

impl ModernHvac {
    /// Read a modern payload. `null` or `{}` gives an all-absent snapshot,
    /// and a field of the wrong type reads as absent.
    pub fn from_raw(raw: &Value) -> Result<Self, HvacError> {
        let raw = payload(raw)?;
        let current: Map<String, Value> =
            decode(&raw, "currentTemperatureIndication").unwrap_or_default();
        let target: Map<String, Value> = decode(&raw, "targetTemperature").unwrap_or_default();

        Ok(Self {
            current_temperature: decode(&current, "value"),
            target_temperature: decode(&target, "value"),
            started_at: decode(&raw, "startedAt"),
            status: decode(&raw, "status"),
            kind: decode(&raw, "type"),
            duration: decode(&raw, "duration"),
            options: decode(&raw, "options"),
            command_id: decode(&raw, "commandId"),
            last_updated: decode(&target, "timestamp").or_else(|| decode(&current, "timestamp")),
        })
    }

    pub fn started_at(&self) -> Option<&str> {
        self.started_at.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// HVAC command type (`type` in the payload)
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn duration(&self) -> Option<&Number> {
        self.duration.as_ref()
    }

    /// Named heater/defogger toggles, passed through as received
    pub fn options(&self) -> Option<&Map<String, Value>> {
        self.options.as_ref()
    }

    pub fn command_id(&self) -> Option<&str> {
        self.command_id.as_deref()
    }
}

impl HvacReadings for ModernHvac {
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
        false
    }

    fn as_dict(&self) -> Map<String, Value> {
        let mut dict = Map::with_capacity(9);
        dict.insert("current_temperature".into(), field(&self.current_temperature));
        dict.insert("target_temperature".into(), field(&self.target_temperature));
        dict.insert("started_at".into(), field(&self.started_at));
        dict.insert("status".into(), field(&self.status));
        dict.insert("type".into(), field(&self.kind));
        dict.insert("duration".into(), field(&self.duration));
        dict.insert("options".into(), field(&self.options));
        dict.insert("command_id".into(), field(&self.command_id));
        dict.insert("last_updated".into(), field(&self.last_updated));
        dict
    }
}

impl fmt::Display for ModernHvac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        repr::write_dict(f, &self.as_dict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> Value {
        json!({
            "frontDefogger": "",
            "frontDriverSeatHeater": "",
            "frontPassengerSeatHeater": "",
            "mirrorHeater": "",
            "rearDefogger": "",
            "rearDriverSeatHeater": "",
            "rearPassengerSeatHeater": "",
            "steeringHeater": "",
        })
    }

    fn example() -> ModernHvac {
        ModernHvac::from_raw(&json!({
            "currentTemperatureIndication": {
                "timestamp": "2020-10-16T03:50:15Z",
                "unit": "string",
                "value": 22,
            },
            "targetTemperature": {
                "timestamp": "2020-10-16T03:50:15Z",
                "unit": "string",
                "value": 21,
            },
            "startedAt": "",
            "status": "",
            "type": "",
            "duration": 1,
            "options": options(),
            "commandId": "",
        }))
        .unwrap()
    }

    #[test]
    fn test_modern_fields() {
        let hvac = example();

        assert!(!hvac.is_legacy());
        assert_eq!(hvac.current_temperature(), Some(&Number::from(22)));
        assert_eq!(hvac.target_temperature(), Some(&Number::from(21)));
        assert_eq!(hvac.started_at(), Some(""));
        assert_eq!(hvac.status(), Some(""));
        assert_eq!(hvac.kind(), Some(""));
        assert_eq!(hvac.duration(), Some(&Number::from(1)));
        assert_eq!(hvac.command_id(), Some(""));
        assert_eq!(hvac.options().cloned().map(Value::Object), Some(options()));
        assert_eq!(hvac.last_updated(), Some("2020-10-16T03:50:15Z"));
    }

    #[test]
    fn test_empty_payload() {
        for raw in [json!({}), Value::Null] {
            let hvac = ModernHvac::from_raw(&raw).unwrap();
            assert!(!hvac.is_legacy());
            assert_eq!(hvac.current_temperature(), None);
            assert_eq!(hvac.target_temperature(), None);
            assert_eq!(hvac.started_at(), None);
            assert_eq!(hvac.status(), None);
            assert_eq!(hvac.kind(), None);
            assert_eq!(hvac.duration(), None);
            assert_eq!(hvac.command_id(), None);
            assert_eq!(hvac.options(), None);
            assert_eq!(hvac.last_updated(), None);
        }
    }

    #[test]
    fn test_last_updated_falls_back_to_current_reading() {
        let hvac = ModernHvac::from_raw(&json!({
            "currentTemperatureIndication": {"timestamp": "2020-10-16T03:50:15Z", "value": 22},
            "targetTemperature": {"value": 21},
        }))
        .unwrap();
        assert_eq!(hvac.last_updated(), Some("2020-10-16T03:50:15Z"));
    }

    #[test]
    fn test_as_dict_order() {
        let keys: Vec<String> = example().as_dict().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "current_temperature",
                "target_temperature",
                "started_at",
                "status",
                "type",
                "duration",
                "options",
                "command_id",
                "last_updated",
            ]
        );
    }

    #[test]
    fn test_as_dict_values() {
        let dict = Value::Object(example().as_dict());
        assert_eq!(
            dict,
            json!({
                "current_temperature": 22,
                "target_temperature": 21,
                "started_at": "",
                "status": "",
                "type": "",
                "duration": 1,
                "options": options(),
                "command_id": "",
                "last_updated": "2020-10-16T03:50:15Z",
            })
        );
    }

    #[test]
    fn test_display_as_python_dict() {
        assert_eq!(
            example().to_string(),
            "{'current_temperature': 22, 'target_temperature': 21, \
             'started_at': '', 'status': '', 'type': '', 'duration': 1, \
             'options': {'frontDefogger': '', 'frontDriverSeatHeater': '', \
             'frontPassengerSeatHeater': '', 'mirrorHeater': '', 'rearDefogger': '', \
             'rearDriverSeatHeater': '', 'rearPassengerSeatHeater': '', \
             'steeringHeater': ''}, 'command_id': '', 'last_updated': '2020-10-16T03:50:15Z'}"
        );
    }

    #[test]
    fn test_serialize_matches_as_dict() {
        let hvac = example();
        assert_eq!(serde_json::to_value(&hvac).unwrap(), Value::Object(hvac.as_dict()));
    }

    #[test]
    fn test_mistyped_field_reads_as_absent() {
        let hvac = ModernHvac::from_raw(&json!({
            "currentTemperatureIndication": {"timestamp": "2020-10-16T03:50:15Z", "value": 22},
            "targetTemperature": {"value": "warm"},
            "duration": "long",
            "commandId": 42,
            "status": "",
        }))
        .unwrap();

        assert_eq!(hvac.current_temperature(), Some(&Number::from(22)));
        assert_eq!(hvac.target_temperature(), None);
        assert_eq!(hvac.duration(), None);
        assert_eq!(hvac.command_id(), None);
        assert_eq!(hvac.status(), Some(""));
        assert_eq!(hvac.last_updated(), Some("2020-10-16T03:50:15Z"));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = ModernHvac::from_raw(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, HvacError::NotAnObject("an array")));
    }
}
