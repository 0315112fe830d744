//! The array and keyed-array combinators.

use std::hash::Hash;

use serde_json::Value;
use soia_buffers::{Reader, Writer};

use crate::binary::{decode, encode, wire};
use crate::error::DecodeError;
use crate::json::{literals, JsonFlavor};
use crate::keyed_array::KeyedArray;
use crate::reflect::{ArrayType, RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};

fn encode_items<T>(item: &Serializer<T>, items: &[T], writer: &mut Writer) {
    writer.u8(wire::ARRAY);
    encode::write_varint(writer, items.len() as u64);
    for value in items {
        item.encode_slot(value, writer);
    }
}

fn decode_items<T>(
    item: &Serializer<T>,
    reader: &mut Reader<'_>,
    keep: bool,
) -> Result<Vec<T>, DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0 => Ok(Vec::new()),
        wire::ARRAY | wire::STRUCT => {
            let count = decode::read_length(reader)?;
            // Cap preallocation by the bytes actually available.
            let mut items = Vec::with_capacity(count.min(reader.remaining()));
            for _ in 0..count {
                items.push(item.decode_value(reader, keep)?);
            }
            Ok(items)
        }
        marker => Err(DecodeError::WireTypeMismatch {
            expected: "array",
            marker,
        }),
    }
}

fn items_to_json<T>(item: &Serializer<T>, items: &[T], flavor: JsonFlavor) -> Value {
    Value::Array(
        items
            .iter()
            .map(|value| item.json_slot(value, flavor))
            .collect(),
    )
}

fn items_from_json<T>(
    item: &Serializer<T>,
    value: &Value,
    keep: bool,
) -> Result<Vec<T>, DecodeError> {
    match value {
        Value::Array(values) => values
            .iter()
            .map(|value| item.from_json_with(value, keep))
            .collect(),
        v if literals::is_zero(v) => Ok(Vec::new()),
        _ => Err(literals::mismatch("array", value)),
    }
}

struct ArrayOps<T> {
    item: Serializer<T>,
}

impl<T: 'static> SerializerOps<Vec<T>> for ArrayOps<T> {
    fn default_value(&self) -> Vec<T> {
        Vec::new()
    }

    fn is_default(&self, value: &Vec<T>) -> bool {
        value.is_empty()
    }

    fn encode(&self, value: &Vec<T>, writer: &mut Writer) {
        encode_items(&self.item, value, writer);
    }

    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<Vec<T>, DecodeError> {
        decode_items(&self.item, reader, keep)
    }

    fn to_json(&self, value: &Vec<T>, flavor: JsonFlavor) -> Value {
        items_to_json(&self.item, value, flavor)
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<Vec<T>, DecodeError> {
        items_from_json(&self.item, value, keep)
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        Type::Array(ArrayType {
            item: Box::new(self.item.type_signature(registry)),
            key_chain: None,
        })
    }
}

/// Serializer for `Vec<T>` given a serializer for `T`.
pub fn array_serializer<T: 'static>(item: Serializer<T>) -> Serializer<Vec<T>> {
    Serializer::from_ops(ArrayOps { item })
}

struct KeyedArrayOps<T, K: Eq + Hash> {
    item: Serializer<T>,
    key_chain: &'static str,
    key_of: fn(&T) -> K,
}

impl<T: 'static, K: Eq + Hash + 'static> SerializerOps<KeyedArray<T, K>> for KeyedArrayOps<T, K> {
    fn default_value(&self) -> KeyedArray<T, K> {
        KeyedArray::new(Vec::new(), self.key_of)
    }

    fn is_default(&self, value: &KeyedArray<T, K>) -> bool {
        value.is_empty()
    }

    fn encode(&self, value: &KeyedArray<T, K>, writer: &mut Writer) {
        encode_items(&self.item, value.items(), writer);
    }

    fn decode(
        &self,
        reader: &mut Reader<'_>,
        keep: bool,
    ) -> Result<KeyedArray<T, K>, DecodeError> {
        let items = decode_items(&self.item, reader, keep)?;
        Ok(KeyedArray::new(items, self.key_of))
    }

    fn to_json(&self, value: &KeyedArray<T, K>, flavor: JsonFlavor) -> Value {
        items_to_json(&self.item, value.items(), flavor)
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<KeyedArray<T, K>, DecodeError> {
        let items = items_from_json(&self.item, value, keep)?;
        Ok(KeyedArray::new(items, self.key_of))
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        Type::Array(ArrayType {
            item: Box::new(self.item.type_signature(registry)),
            key_chain: Some(self.key_chain.to_owned()),
        })
    }
}

/// Serializer for [`KeyedArray<T, K>`]. `key_chain` is the declared path to
/// the key field and `key_of` extracts that key from an element; decoded
/// arrays are built with the same `key_of`, so `find` works on them directly.
pub fn keyed_array_serializer<T: 'static, K: Eq + Hash + 'static>(
    item: Serializer<T>,
    key_chain: &'static str,
    key_of: fn(&T) -> K,
) -> Serializer<KeyedArray<T, K>> {
    Serializer::from_ops(KeyedArrayOps {
        item,
        key_chain,
        key_of,
    })
}
