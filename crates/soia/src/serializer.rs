//! The serializer facade and the per-type operations behind it.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use soia_buffers::{Reader, Writer};

use crate::binary::{decode, wire};
use crate::error::DecodeError;
use crate::json::{self, JsonFlavor};
use crate::reflect::{RecordRegistry, Type, TypeDescriptor};

/// Per-type encode and decode operations.
///
/// One implementation exists for each shape a schema type can take; the
/// [`Serializer`] facade erases it behind an `Arc`. Implementations must be
/// stateless apart from their construction-time configuration: a serializer
/// is shared freely across threads.
pub(crate) trait SerializerOps<T>: Send + Sync {
    /// The default value of the type.
    fn default_value(&self) -> T;

    /// True when `value` equals the type's default value.
    fn is_default(&self, value: &T) -> bool;

    /// Writes the natural wire form of `value`.
    fn encode(&self, value: &T, writer: &mut Writer);

    /// Reads one value; the marker byte has not been consumed yet. `keep`
    /// asks composite types to capture unrecognized data.
    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<T, DecodeError>;

    /// Builds the JSON form of `value` in the requested flavor.
    fn to_json(&self, value: &T, flavor: JsonFlavor) -> Value;

    /// Reads one value from its JSON form, accepting both flavors.
    fn from_json(&self, value: &Value, keep: bool) -> Result<T, DecodeError>;

    /// Describes this type, registering every reachable record.
    fn type_signature(&self, registry: &mut RecordRegistry) -> Type;

    /// Writes `value` as a composite slot: default values compact to a
    /// single `0` byte. Optionals override this, absence always encodes as
    /// its own marker so that `Some(default)` stays distinguishable.
    fn encode_slot(&self, value: &T, writer: &mut Writer) {
        if self.is_default(value) {
            writer.u8(0);
        } else {
            self.encode(value, writer);
        }
    }

    /// JSON counterpart of [`encode_slot`](SerializerOps::encode_slot);
    /// compaction applies to the dense flavor only.
    fn json_slot(&self, value: &T, flavor: JsonFlavor) -> Value {
        if flavor == JsonFlavor::Dense && self.is_default(value) {
            Value::from(0)
        } else {
            self.to_json(value, flavor)
        }
    }
}

struct Inner<T> {
    ops: Box<dyn SerializerOps<T>>,
    descriptor: OnceLock<TypeDescriptor>,
}

/// Encodes and decodes values of one schema type.
///
/// A serializer is immutable and cheap to clone; generated code exposes one
/// per type through a `'static` accessor and every thread uses it directly.
/// The three representations it speaks are interchangeable: compact binary
/// via [`to_bytes`](Serializer::to_bytes), dense JSON via
/// [`to_json`](Serializer::to_json) and readable JSON via
/// [`to_readable_json`](Serializer::to_readable_json).
pub struct Serializer<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Serializer<T> {
    fn clone(&self) -> Serializer<T> {
        Serializer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Serializer<T> {
    pub(crate) fn from_ops(ops: impl SerializerOps<T> + 'static) -> Serializer<T> {
        Serializer {
            inner: Arc::new(Inner {
                ops: Box::new(ops),
                descriptor: OnceLock::new(),
            }),
        }
    }

    /// Encodes `value` into the compact binary form.
    pub fn to_bytes(&self, value: &T) -> Vec<u8> {
        let mut writer = Writer::new();
        self.inner.ops.encode(value, &mut writer);
        writer.flush()
    }

    /// Decodes a value from its binary form, dropping unrecognized data.
    ///
    /// Fails with [`DecodeError::TrailingBytes`] unless the value spans the
    /// whole input.
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        self.read_bytes(bytes, false)
    }

    /// Like [`from_bytes`](Serializer::from_bytes), but captures fields and
    /// variants added by newer schema revisions so that re-encoding the
    /// value reproduces the input byte for byte.
    pub fn from_bytes_keep_unrecognized(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        self.read_bytes(bytes, true)
    }

    fn read_bytes(&self, bytes: &[u8], keep: bool) -> Result<T, DecodeError> {
        let mut reader = Reader::new(bytes);
        let value = self.decode_value(&mut reader, keep)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes);
        }
        Ok(value)
    }

    /// Builds the dense JSON form of `value`.
    pub fn to_json(&self, value: &T) -> Value {
        self.inner.ops.to_json(value, JsonFlavor::Dense)
    }

    /// Builds the readable JSON form of `value`.
    pub fn to_readable_json(&self, value: &T) -> Value {
        self.inner.ops.to_json(value, JsonFlavor::Readable)
    }

    /// Dense JSON as compact text.
    pub fn to_json_code(&self, value: &T) -> String {
        json::print(&self.to_json(value), JsonFlavor::Dense)
    }

    /// Readable JSON as indented text.
    pub fn to_readable_json_code(&self, value: &T) -> String {
        json::print(&self.to_readable_json(value), JsonFlavor::Readable)
    }

    /// Decodes a value from either JSON flavor, dropping unrecognized data.
    pub fn from_json(&self, value: &Value) -> Result<T, DecodeError> {
        self.inner.ops.from_json(value, false)
    }

    /// Like [`from_json`](Serializer::from_json), but captures unrecognized
    /// dense fields and variants for re-emission.
    pub fn from_json_keep_unrecognized(&self, value: &Value) -> Result<T, DecodeError> {
        self.inner.ops.from_json(value, true)
    }

    /// Parses JSON text and decodes the value it holds.
    pub fn from_json_code(&self, code: &str) -> Result<T, DecodeError> {
        self.from_json(&json::parse(code)?)
    }

    /// Keep-unrecognized variant of [`from_json_code`](Serializer::from_json_code).
    pub fn from_json_code_keep_unrecognized(&self, code: &str) -> Result<T, DecodeError> {
        self.inner.ops.from_json(&json::parse(code)?, true)
    }

    /// The default value of the type.
    pub fn default_value(&self) -> T {
        self.inner.ops.default_value()
    }

    /// Describes the type this serializer handles. Built once on first
    /// access and memoized; two calls return the same descriptor.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        self.inner.descriptor.get_or_init(|| {
            let mut registry = RecordRegistry::new();
            let ty = self.inner.ops.type_signature(&mut registry);
            TypeDescriptor::new(ty, registry.into_records())
        })
    }

    /// Decodes one value, transparently unwrapping opaque envelopes. The
    /// envelope must hold exactly one value.
    pub(crate) fn decode_value(&self, reader: &mut Reader<'_>, keep: bool) -> Result<T, DecodeError> {
        if reader.peek()? == wire::OPAQUE {
            reader.skip(1)?;
            let length = decode::read_length(reader)?;
            let bytes = reader.buf(length)?;
            let mut inner = Reader::new(bytes);
            let value = self.decode_value(&mut inner, keep)?;
            if !inner.is_empty() {
                return Err(DecodeError::TrailingBytes);
            }
            Ok(value)
        } else {
            self.inner.ops.decode(reader, keep)
        }
    }

    pub(crate) fn is_default(&self, value: &T) -> bool {
        self.inner.ops.is_default(value)
    }

    pub(crate) fn encode(&self, value: &T, writer: &mut Writer) {
        self.inner.ops.encode(value, writer);
    }

    pub(crate) fn encode_slot(&self, value: &T, writer: &mut Writer) {
        self.inner.ops.encode_slot(value, writer);
    }

    pub(crate) fn json_slot(&self, value: &T, flavor: JsonFlavor) -> Value {
        self.inner.ops.json_slot(value, flavor)
    }

    pub(crate) fn to_json_flavored(&self, value: &T, flavor: JsonFlavor) -> Value {
        self.inner.ops.to_json(value, flavor)
    }

    pub(crate) fn from_json_with(&self, value: &Value, keep: bool) -> Result<T, DecodeError> {
        self.inner.ops.from_json(value, keep)
    }

    pub(crate) fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        self.inner.ops.type_signature(registry)
    }
}
