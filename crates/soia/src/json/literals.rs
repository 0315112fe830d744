//! Literal forms of primitive values, shared by the dense and readable
//! flavors.
//!
//! Emission rules that keep every document portable across JSON parsers:
//! 64-bit integers outside the exact double range become decimal strings,
//! non-finite floats become the strings `"NaN"`, `"Infinity"` and
//! `"-Infinity"`, and byte strings become padded standard base64. Parsers
//! accept both the number and string form for every numeric type.

use base64::prelude::{Engine, BASE64_STANDARD};
use serde_json::{Number, Value};

use crate::error::DecodeError;

/// Largest integer magnitude a JavaScript number represents exactly.
pub(crate) const MAX_SAFE_INT: u64 = (1 << 53) - 1;

pub(crate) fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::JsonTypeMismatch {
        expected,
        found: super::kind(found),
    }
}

/// True for any numeric zero. Decoders accept `0` as the default value of
/// every type, which is what dense slots compact defaults to.
pub(crate) fn is_zero(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.as_f64() == Some(0.0))
}

pub(crate) fn i64_to_json(value: i64) -> Value {
    if value.unsigned_abs() <= MAX_SAFE_INT {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}

pub(crate) fn u64_to_json(value: u64) -> Value {
    if value <= MAX_SAFE_INT {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}

pub(crate) fn f64_to_json(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(number) => Value::Number(number),
        None => Value::String(
            if value.is_nan() {
                "NaN"
            } else if value > 0.0 {
                "Infinity"
            } else {
                "-Infinity"
            }
            .to_owned(),
        ),
    }
}

pub(crate) fn bytes_to_json(value: &[u8]) -> Value {
    Value::String(BASE64_STANDARD.encode(value))
}

pub(crate) fn json_to_bool(value: &Value) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(_) => Ok(json_to_f64(value)? != 0.0),
        _ => Err(mismatch("boolean", value)),
    }
}

pub(crate) fn json_to_i64(value: &Value) -> Result<i64, DecodeError> {
    match value {
        Value::Number(number) => {
            if let Some(v) = number.as_i64() {
                Ok(v)
            } else if let Some(v) = number.as_u64() {
                Ok(v as i64)
            } else {
                Ok(number.as_f64().unwrap_or(0.0) as i64)
            }
        }
        Value::String(text) => text
            .parse::<i64>()
            .or_else(|_| text.parse::<u64>().map(|v| v as i64))
            .or_else(|_| text.parse::<f64>().map(|v| v as i64))
            .map_err(|_| mismatch("number", value)),
        _ => Err(mismatch("number", value)),
    }
}

pub(crate) fn json_to_u64(value: &Value) -> Result<u64, DecodeError> {
    match value {
        Value::Number(number) => {
            if let Some(v) = number.as_u64() {
                Ok(v)
            } else if let Some(v) = number.as_i64() {
                Ok(v as u64)
            } else {
                Ok(number.as_f64().unwrap_or(0.0) as u64)
            }
        }
        Value::String(text) => text
            .parse::<u64>()
            .or_else(|_| text.parse::<i64>().map(|v| v as u64))
            .or_else(|_| text.parse::<f64>().map(|v| v as u64))
            .map_err(|_| mismatch("number", value)),
        _ => Err(mismatch("number", value)),
    }
}

pub(crate) fn json_to_f64(value: &Value) -> Result<f64, DecodeError> {
    match value {
        Value::Number(number) => Ok(number.as_f64().unwrap_or(0.0)),
        Value::String(text) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => text.parse().map_err(|_| mismatch("number", value)),
        },
        _ => Err(mismatch("number", value)),
    }
}

pub(crate) fn json_to_bytes(value: &Value) -> Result<Vec<u8>, DecodeError> {
    match value {
        Value::String(text) => Ok(BASE64_STANDARD.decode(text)?),
        v if is_zero(v) => Ok(Vec::new()),
        _ => Err(mismatch("string", value)),
    }
}
