//! Common read-only view over both HVAC payload shapes

use crate::error::{json_kind, HvacError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use tracing::warn;

/// Fields every HVAC snapshot exposes, whatever shape it came from
pub trait HvacReadings {
    /// Cabin temperature as reported by the vehicle
    fn current_temperature(&self) -> Option<&Number>;

    /// Temperature the climate control is set to
    fn target_temperature(&self) -> Option<&Number>;

    /// Timestamp of the most recent reading
    fn last_updated(&self) -> Option<&str>;

    /// Whether the snapshot came from the legacy payload shape
    fn is_legacy(&self) -> bool;

    /// All fields of this shape, in declared order, absent ones as `null`
    fn as_dict(&self) -> Map<String, Value>;
}

/// `Some(v)` as its JSON value, `None` as `null`
pub(crate) fn field<T: Clone + Into<Value>>(value: &Option<T>) -> Value {
    value.clone().map_or(Value::Null, Into::into)
}

/// Top-level payload object; `null` reads as an empty one
pub(crate) fn payload(raw: &Value) -> Result<Map<String, Value>, HvacError> {
    match raw {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        other => Err(HvacError::NotAnObject(json_kind(other))),
    }
}

/// Decode one field on its own; a wrong type reads as absent
pub(crate) fn decode<T: DeserializeOwned>(raw: &Map<String, Value>, key: &str) -> Option<T> {
    let value = raw.get(key).filter(|v| !v.is_null())?;
    match T::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!("Ignoring HVAC field {}: {}", key, e);
            None
        }
    }
}
