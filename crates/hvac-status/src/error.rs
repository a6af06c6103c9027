//! HVAC Error Types

use thiserror::Error;

/// Errors while reading an HVAC payload
#[derive(Debug, Error)]
pub enum HvacError {
    /// Payload is neither an object nor null
    #[error("HVAC payload must be an object, got {0}")]
    NotAnObject(&'static str),
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
