//! The optional combinator.

use serde_json::Value;
use soia_buffers::{Reader, Writer};

use crate::binary::wire;
use crate::error::DecodeError;
use crate::json::JsonFlavor;
use crate::reflect::{RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};

struct OptionalOps<T> {
    item: Serializer<T>,
}

impl<T: 'static> SerializerOps<Option<T>> for OptionalOps<T> {
    fn default_value(&self) -> Option<T> {
        None
    }

    fn is_default(&self, value: &Option<T>) -> bool {
        value.is_none()
    }

    fn encode(&self, value: &Option<T>, writer: &mut Writer) {
        match value {
            None => writer.u8(wire::ABSENT),
            Some(item) => self.item.encode_slot(item, writer),
        }
    }

    // Absence has its own marker: compacting None to 0 would collapse it
    // with Some(default) on decode.
    fn encode_slot(&self, value: &Option<T>, writer: &mut Writer) {
        self.encode(value, writer);
    }

    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<Option<T>, DecodeError> {
        if reader.peek()? == wire::ABSENT {
            reader.skip(1)?;
            Ok(None)
        } else {
            // Any other marker is a present value, including the compact 0
            // written when a required field became optional.
            Ok(Some(self.item.decode_value(reader, keep)?))
        }
    }

    fn to_json(&self, value: &Option<T>, flavor: JsonFlavor) -> Value {
        match value {
            None => Value::Null,
            Some(item) => self.item.json_slot(item, flavor),
        }
    }

    fn json_slot(&self, value: &Option<T>, flavor: JsonFlavor) -> Value {
        self.to_json(value, flavor)
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<Option<T>, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(self.item.from_json_with(value, keep)?))
        }
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        Type::Optional(Box::new(self.item.type_signature(registry)))
    }
}

/// Wraps a serializer to handle `Option<T>`. Absent values encode as their
/// own marker byte in binary and as `null` in JSON.
pub fn optional_serializer<T: 'static>(item: Serializer<T>) -> Serializer<Option<T>> {
    Serializer::from_ops(OptionalOps { item })
}
