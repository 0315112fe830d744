//! JSON text handling shared by all serializers.

pub(crate) mod literals;

use serde_json::Value;

use crate::error::DecodeError;

/// Structural layout of emitted JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum JsonFlavor {
    /// Positional arrays, numeric enum tags, defaults compacted to `0`.
    /// Stable under schema evolution and cheap to parse.
    Dense,
    /// Field-named objects and variant names, for humans and for consumers
    /// that match on names.
    Readable,
}

pub(crate) fn parse(code: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(code)?)
}

pub(crate) fn print(value: &Value, flavor: JsonFlavor) -> String {
    match flavor {
        JsonFlavor::Dense => value.to_string(),
        JsonFlavor::Readable => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// Short name of a JSON value's shape, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
