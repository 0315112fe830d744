//! Serializers for the nine primitive types.

use serde_json::Value;
use soia_buffers::{Reader, Writer};

use crate::binary::{decode, encode};
use crate::error::DecodeError;
use crate::json::literals;
use crate::json::JsonFlavor;
use crate::reflect::{PrimitiveType, RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};
use crate::timestamp::Timestamp;

struct BoolOps;

impl SerializerOps<bool> for BoolOps {
    fn default_value(&self) -> bool {
        false
    }

    fn is_default(&self, value: &bool) -> bool {
        !*value
    }

    fn encode(&self, value: &bool, writer: &mut Writer) {
        writer.u8(u8::from(*value));
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<bool, DecodeError> {
        Ok(decode::read_u64(reader)? != 0)
    }

    fn to_json(&self, value: &bool, _flavor: JsonFlavor) -> Value {
        Value::Bool(*value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<bool, DecodeError> {
        literals::json_to_bool(value)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Bool)
    }
}

/// Serializer for `bool`. The wire form is the integer 0 or 1.
pub fn bool_serializer() -> Serializer<bool> {
    Serializer::from_ops(BoolOps)
}

struct Int32Ops;

impl SerializerOps<i32> for Int32Ops {
    fn default_value(&self) -> i32 {
        0
    }

    fn is_default(&self, value: &i32) -> bool {
        *value == 0
    }

    fn encode(&self, value: &i32, writer: &mut Writer) {
        encode::write_int(writer, i64::from(*value));
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<i32, DecodeError> {
        // Out-of-range values written by a wider type wrap.
        Ok(decode::read_i64(reader)? as i32)
    }

    fn to_json(&self, value: &i32, _flavor: JsonFlavor) -> Value {
        Value::from(*value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<i32, DecodeError> {
        Ok(literals::json_to_i64(value)? as i32)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Int32)
    }
}

/// Serializer for `i32`.
pub fn int32_serializer() -> Serializer<i32> {
    Serializer::from_ops(Int32Ops)
}

struct Int64Ops;

impl SerializerOps<i64> for Int64Ops {
    fn default_value(&self) -> i64 {
        0
    }

    fn is_default(&self, value: &i64) -> bool {
        *value == 0
    }

    fn encode(&self, value: &i64, writer: &mut Writer) {
        encode::write_int(writer, *value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<i64, DecodeError> {
        decode::read_i64(reader)
    }

    fn to_json(&self, value: &i64, _flavor: JsonFlavor) -> Value {
        literals::i64_to_json(*value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<i64, DecodeError> {
        literals::json_to_i64(value)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Int64)
    }
}

/// Serializer for `i64`. JSON keeps values outside the exact double range
/// as decimal strings.
pub fn int64_serializer() -> Serializer<i64> {
    Serializer::from_ops(Int64Ops)
}

struct Uint64Ops;

impl SerializerOps<u64> for Uint64Ops {
    fn default_value(&self) -> u64 {
        0
    }

    fn is_default(&self, value: &u64) -> bool {
        *value == 0
    }

    fn encode(&self, value: &u64, writer: &mut Writer) {
        encode::write_uint(writer, *value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<u64, DecodeError> {
        decode::read_u64(reader)
    }

    fn to_json(&self, value: &u64, _flavor: JsonFlavor) -> Value {
        literals::u64_to_json(*value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<u64, DecodeError> {
        literals::json_to_u64(value)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Uint64)
    }
}

/// Serializer for `u64`.
pub fn uint64_serializer() -> Serializer<u64> {
    Serializer::from_ops(Uint64Ops)
}

struct Float32Ops;

impl SerializerOps<f32> for Float32Ops {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn is_default(&self, value: &f32) -> bool {
        *value == 0.0
    }

    fn encode(&self, value: &f32, writer: &mut Writer) {
        encode::write_float32(writer, *value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<f32, DecodeError> {
        Ok(decode::read_f64(reader)? as f32)
    }

    fn to_json(&self, value: &f32, _flavor: JsonFlavor) -> Value {
        literals::f64_to_json(f64::from(*value))
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<f32, DecodeError> {
        Ok(literals::json_to_f64(value)? as f32)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Float32)
    }
}

/// Serializer for `f32`.
pub fn float32_serializer() -> Serializer<f32> {
    Serializer::from_ops(Float32Ops)
}

struct Float64Ops;

impl SerializerOps<f64> for Float64Ops {
    fn default_value(&self) -> f64 {
        0.0
    }

    fn is_default(&self, value: &f64) -> bool {
        *value == 0.0
    }

    fn encode(&self, value: &f64, writer: &mut Writer) {
        encode::write_float64(writer, *value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<f64, DecodeError> {
        decode::read_f64(reader)
    }

    fn to_json(&self, value: &f64, _flavor: JsonFlavor) -> Value {
        literals::f64_to_json(*value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<f64, DecodeError> {
        literals::json_to_f64(value)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Float64)
    }
}

/// Serializer for `f64`. Non-finite values take their string form in JSON.
pub fn float64_serializer() -> Serializer<f64> {
    Serializer::from_ops(Float64Ops)
}

struct StringOps;

impl SerializerOps<String> for StringOps {
    fn default_value(&self) -> String {
        String::new()
    }

    fn is_default(&self, value: &String) -> bool {
        value.is_empty()
    }

    fn encode(&self, value: &String, writer: &mut Writer) {
        encode::write_string(writer, value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<String, DecodeError> {
        decode::read_string(reader)
    }

    fn to_json(&self, value: &String, _flavor: JsonFlavor) -> Value {
        Value::String(value.clone())
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<String, DecodeError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            v if literals::is_zero(v) => Ok(String::new()),
            _ => Err(literals::mismatch("string", value)),
        }
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::String)
    }
}

/// Serializer for `String`.
pub fn string_serializer() -> Serializer<String> {
    Serializer::from_ops(StringOps)
}

struct BytesOps;

impl SerializerOps<Vec<u8>> for BytesOps {
    fn default_value(&self) -> Vec<u8> {
        Vec::new()
    }

    fn is_default(&self, value: &Vec<u8>) -> bool {
        value.is_empty()
    }

    fn encode(&self, value: &Vec<u8>, writer: &mut Writer) {
        encode::write_bytes(writer, value);
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<Vec<u8>, DecodeError> {
        decode::read_byte_string(reader)
    }

    fn to_json(&self, value: &Vec<u8>, _flavor: JsonFlavor) -> Value {
        literals::bytes_to_json(value)
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<Vec<u8>, DecodeError> {
        literals::json_to_bytes(value)
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Bytes)
    }
}

/// Serializer for `Vec<u8>`. The JSON form is padded standard base64.
pub fn bytes_serializer() -> Serializer<Vec<u8>> {
    Serializer::from_ops(BytesOps)
}

struct TimestampOps;

impl SerializerOps<Timestamp> for TimestampOps {
    fn default_value(&self) -> Timestamp {
        Timestamp::EPOCH
    }

    fn is_default(&self, value: &Timestamp) -> bool {
        *value == Timestamp::EPOCH
    }

    fn encode(&self, value: &Timestamp, writer: &mut Writer) {
        encode::write_timestamp(writer, value.unix_millis());
    }

    fn decode(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<Timestamp, DecodeError> {
        Ok(Timestamp::from_unix_millis(decode::read_i64(reader)?))
    }

    fn to_json(&self, value: &Timestamp, _flavor: JsonFlavor) -> Value {
        // The clamped range fits in an exact double.
        Value::from(value.unix_millis())
    }

    fn from_json(&self, value: &Value, _keep: bool) -> Result<Timestamp, DecodeError> {
        Ok(Timestamp::from_unix_millis(literals::json_to_i64(value)?))
    }

    fn type_signature(&self, _registry: &mut RecordRegistry) -> Type {
        Type::Primitive(PrimitiveType::Timestamp)
    }
}

/// Serializer for [`Timestamp`]. Both JSON flavors carry unix milliseconds.
pub fn timestamp_serializer() -> Serializer<Timestamp> {
    Serializer::from_ops(TimestampOps)
}
