//! Deferred serializer resolution for recursive schemas.

use serde_json::Value;
use soia_buffers::{Reader, Writer};

use crate::error::DecodeError;
use crate::json::JsonFlavor;
use crate::reflect::{RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};

struct LazyOps<T: 'static> {
    resolve: fn() -> &'static Serializer<T>,
}

impl<T: 'static> SerializerOps<T> for LazyOps<T> {
    fn default_value(&self) -> T {
        (self.resolve)().default_value()
    }

    fn is_default(&self, value: &T) -> bool {
        (self.resolve)().is_default(value)
    }

    fn encode(&self, value: &T, writer: &mut Writer) {
        (self.resolve)().encode(value, writer);
    }

    fn encode_slot(&self, value: &T, writer: &mut Writer) {
        (self.resolve)().encode_slot(value, writer);
    }

    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<T, DecodeError> {
        (self.resolve)().decode_value(reader, keep)
    }

    fn to_json(&self, value: &T, flavor: JsonFlavor) -> Value {
        (self.resolve)().to_json_flavored(value, flavor)
    }

    fn json_slot(&self, value: &T, flavor: JsonFlavor) -> Value {
        (self.resolve)().json_slot(value, flavor)
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<T, DecodeError> {
        (self.resolve)().from_json_with(value, keep)
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        (self.resolve)().type_signature(registry)
    }
}

/// A serializer that resolves its target on first use instead of at
/// construction time.
///
/// Recursive schemas need this: a record whose fields reach back to itself
/// cannot finish building its own serializer while a field still demands
/// one. Generated code passes an accessor to the type's memoized `'static`
/// serializer, which is guaranteed to be initialized before any value
/// operation can run. Descriptor construction stays terminating because the
/// record registry resolves repeat visits to the already-claimed id.
pub fn lazy_serializer<T>(resolve: fn() -> &'static Serializer<T>) -> Serializer<T> {
    Serializer::from_ops(LazyOps { resolve })
}
