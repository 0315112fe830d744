//! Struct serializers, assembled from generated field metadata.

use std::collections::HashSet;

use serde_json::{Map, Value};
use soia_buffers::{Reader, Writer};

use crate::binary::{decode, encode, wire};
use crate::error::DecodeError;
use crate::json::{literals, JsonFlavor};
use crate::record::Struct;
use crate::reflect::{FieldDescriptor, RecordDescriptor, RecordKind, RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};
use crate::unrecognized::UnrecognizedFields;

/// Assembles the serializer for one generated struct type.
///
/// Generated code declares each field with its name, number, serializer and
/// accessors, in declaration order:
///
/// ```ignore
/// StructBuilder::<Point>::new("structs.soia:Point")
///     .field("x", 0, int32_serializer(), |p| &p.x, |m, v| m.x = v)
///     .field("y", 1, int32_serializer(), |p| &p.y, |m, v| m.y = v)
///     .build()
/// ```
///
/// `build` panics on malformed metadata; the schema compiler never emits
/// any.
pub struct StructBuilder<T: Struct> {
    id: &'static str,
    fields: Vec<Box<dyn FieldOps<T>>>,
}

impl<T: Struct> StructBuilder<T> {
    /// Starts a builder for the record with the given qualified id.
    pub fn new(id: &'static str) -> StructBuilder<T> {
        assert!(
            id.contains(':'),
            "record id must look like module.soia:Name, got {id:?}"
        );
        StructBuilder {
            id,
            fields: Vec::new(),
        }
    }

    /// Declares one field. `get` borrows the field from a frozen value and
    /// `set` stores a decoded value into the mutable builder.
    pub fn field<V: 'static>(
        mut self,
        name: &'static str,
        number: u32,
        serializer: Serializer<V>,
        get: fn(&T) -> &V,
        set: fn(&mut T::Mutable, V),
    ) -> StructBuilder<T> {
        self.fields.push(Box::new(Field {
            name,
            number,
            serializer,
            get,
            set,
        }));
        self
    }

    /// Finalizes the serializer.
    pub fn build(self) -> Serializer<T> {
        let mut names = HashSet::new();
        for field in &self.fields {
            assert!(
                names.insert(field.name()),
                "duplicate field name {:?} in {}",
                field.name(),
                self.id
            );
        }
        let slot_count = self
            .fields
            .iter()
            .map(|field| field.number() as usize + 1)
            .max()
            .unwrap_or(0);
        let mut slots = vec![None; slot_count];
        for (position, field) in self.fields.iter().enumerate() {
            let slot = &mut slots[field.number() as usize];
            assert!(
                slot.is_none(),
                "duplicate field number {} in {}",
                field.number(),
                self.id
            );
            *slot = Some(position);
        }
        Serializer::from_ops(StructOps {
            id: self.id,
            fields: self.fields,
            slots,
        })
    }
}

/// Object-safe view of one field, erasing its value type.
trait FieldOps<T: Struct>: Send + Sync {
    fn name(&self) -> &'static str;
    fn number(&self) -> u32;
    fn is_default(&self, owner: &T) -> bool;
    fn encode_slot(&self, owner: &T, writer: &mut Writer);
    fn decode_into(
        &self,
        reader: &mut Reader<'_>,
        keep: bool,
        into: &mut T::Mutable,
    ) -> Result<(), DecodeError>;
    fn json_slot(&self, owner: &T, flavor: JsonFlavor) -> Value;
    fn json_into(&self, value: &Value, keep: bool, into: &mut T::Mutable)
        -> Result<(), DecodeError>;
    fn field_type(&self, registry: &mut RecordRegistry) -> Type;
}

struct Field<T: Struct, V> {
    name: &'static str,
    number: u32,
    serializer: Serializer<V>,
    get: fn(&T) -> &V,
    set: fn(&mut T::Mutable, V),
}

impl<T: Struct, V: 'static> FieldOps<T> for Field<T, V> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn number(&self) -> u32 {
        self.number
    }

    fn is_default(&self, owner: &T) -> bool {
        self.serializer.is_default((self.get)(owner))
    }

    fn encode_slot(&self, owner: &T, writer: &mut Writer) {
        self.serializer.encode_slot((self.get)(owner), writer);
    }

    fn decode_into(
        &self,
        reader: &mut Reader<'_>,
        keep: bool,
        into: &mut T::Mutable,
    ) -> Result<(), DecodeError> {
        (self.set)(into, self.serializer.decode_value(reader, keep)?);
        Ok(())
    }

    fn json_slot(&self, owner: &T, flavor: JsonFlavor) -> Value {
        self.serializer.json_slot((self.get)(owner), flavor)
    }

    fn json_into(
        &self,
        value: &Value,
        keep: bool,
        into: &mut T::Mutable,
    ) -> Result<(), DecodeError> {
        (self.set)(into, self.serializer.from_json_with(value, keep)?);
        Ok(())
    }

    fn field_type(&self, registry: &mut RecordRegistry) -> Type {
        self.serializer.type_signature(registry)
    }
}

struct StructOps<T: Struct> {
    id: &'static str,
    /// Declaration order.
    fields: Vec<Box<dyn FieldOps<T>>>,
    /// Field number to position in `fields`. Gaps are removed fields.
    slots: Vec<Option<usize>>,
}

impl<T: Struct> StructOps<T> {
    /// Number of slots to emit: up to and including the last slot holding a
    /// non-default field.
    fn emit_count(&self, value: &T) -> usize {
        for number in (0..self.slots.len()).rev() {
            if let Some(position) = self.slots[number] {
                if !self.fields[position].is_default(value) {
                    return number + 1;
                }
            }
        }
        0
    }
}

impl<T: Struct> SerializerOps<T> for StructOps<T> {
    fn default_value(&self) -> T {
        T::from_mutable(T::Mutable::default())
    }

    fn is_default(&self, value: &T) -> bool {
        value.unrecognized_fields().is_empty()
            && self.fields.iter().all(|field| field.is_default(value))
    }

    fn encode(&self, value: &T, writer: &mut Writer) {
        let bag = value.unrecognized_fields().binary_slots();
        let count = match bag {
            // Re-emitting captured trailing slots forces every declared
            // slot out first so the captured ones keep their numbers.
            Some(extra) => self.slots.len() + extra.len(),
            None => self.emit_count(value),
        };
        writer.u8(wire::STRUCT);
        encode::write_varint(writer, count as u64);
        for slot in &self.slots[..count.min(self.slots.len())] {
            match slot {
                Some(position) => self.fields[*position].encode_slot(value, writer),
                None => writer.u8(0),
            }
        }
        if let Some(extra) = bag {
            for raw in extra {
                writer.buf(raw);
            }
        }
    }

    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<T, DecodeError> {
        let marker = reader.u8()?;
        match marker {
            0 => Ok(self.default_value()),
            wire::ARRAY | wire::STRUCT => {
                let count = decode::read_length(reader)?;
                let mut mutable = T::Mutable::default();
                let mut extras: Vec<Vec<u8>> = Vec::new();
                for number in 0..count {
                    match self.slots.get(number).copied().flatten() {
                        Some(position) => {
                            self.fields[position].decode_into(reader, keep, &mut mutable)?
                        }
                        // A gap inside the declared range is a removed
                        // field; its value is dead even when keeping.
                        None if number < self.slots.len() => decode::skip_value(reader)?,
                        None if keep => extras.push(decode::capture_value(reader)?.to_vec()),
                        None => decode::skip_value(reader)?,
                    }
                }
                let value = T::from_mutable(mutable);
                Ok(if extras.is_empty() {
                    value
                } else {
                    value.with_unrecognized_fields(UnrecognizedFields::from_binary(extras))
                })
            }
            marker => Err(DecodeError::WireTypeMismatch {
                expected: "struct",
                marker,
            }),
        }
    }

    fn to_json(&self, value: &T, flavor: JsonFlavor) -> Value {
        match flavor {
            JsonFlavor::Dense => {
                let bag = value.unrecognized_fields().json_slots();
                let count = match bag {
                    Some(_) => self.slots.len(),
                    None => self.emit_count(value),
                };
                let mut slots = Vec::with_capacity(count);
                for slot in &self.slots[..count] {
                    slots.push(match slot {
                        Some(position) => self.fields[*position].json_slot(value, flavor),
                        None => Value::from(0),
                    });
                }
                if let Some(extra) = bag {
                    slots.extend(extra.iter().cloned());
                }
                Value::Array(slots)
            }
            JsonFlavor::Readable => {
                let mut object = Map::new();
                for field in &self.fields {
                    if !field.is_default(value) {
                        object.insert(field.name().to_owned(), field.json_slot(value, flavor));
                    }
                }
                Value::Object(object)
            }
        }
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<T, DecodeError> {
        match value {
            Value::Array(slots) => {
                let mut mutable = T::Mutable::default();
                let mut extras: Vec<Value> = Vec::new();
                for (number, slot) in slots.iter().enumerate() {
                    match self.slots.get(number).copied().flatten() {
                        Some(position) => {
                            self.fields[position].json_into(slot, keep, &mut mutable)?
                        }
                        None if number < self.slots.len() => {}
                        None if keep => extras.push(slot.clone()),
                        None => {}
                    }
                }
                let value = T::from_mutable(mutable);
                Ok(if extras.is_empty() {
                    value
                } else {
                    value.with_unrecognized_fields(UnrecognizedFields::from_json(extras))
                })
            }
            Value::Object(object) => {
                // Readable form. Unknown keys carry names, not numbers, so
                // they cannot be preserved positionally and are skipped.
                let mut mutable = T::Mutable::default();
                for field in &self.fields {
                    if let Some(slot) = object.get(field.name()) {
                        field.json_into(slot, keep, &mut mutable)?;
                    }
                }
                Ok(T::from_mutable(mutable))
            }
            v if literals::is_zero(v) => Ok(self.default_value()),
            _ => Err(literals::mismatch("struct", value)),
        }
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        if registry.claim(self.id) {
            let fields = self
                .fields
                .iter()
                .map(|field| FieldDescriptor {
                    name: field.name().to_owned(),
                    number: field.number(),
                    ty: Some(field.field_type(registry)),
                })
                .collect();
            registry.fill(RecordDescriptor {
                kind: RecordKind::Struct,
                id: self.id.to_owned(),
                fields,
            });
        }
        Type::Record(self.id.to_owned())
    }
}
