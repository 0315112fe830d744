//! Enum serializers, assembled from generated variant metadata.

use std::collections::HashMap;

use serde_json::{json, Value};
use soia_buffers::{Reader, Writer};

use crate::binary::{decode, encode, wire};
use crate::error::DecodeError;
use crate::json::{literals, JsonFlavor};
use crate::record::Enum;
use crate::reflect::{FieldDescriptor, RecordDescriptor, RecordKind, RecordRegistry, Type};
use crate::serializer::{Serializer, SerializerOps};
use crate::unrecognized::{RawVariant, UnrecognizedEnum};

/// Assembles the serializer for one generated enum type.
///
/// Constant variants carry no data and encode as their bare number; data
/// variants wrap a value of some other type. Number 0 is reserved for the
/// unknown variant every enum has implicitly.
///
/// ```ignore
/// EnumBuilder::<Color>::new("enums.soia:Color")
///     .constant("RED", 1, Color::Red, |c| matches!(c, Color::Red))
///     .variant("rgb", 4, Rgb::serializer().clone(), Color::Rgb, |c| match c {
///         Color::Rgb(rgb) => Some(rgb),
///         _ => None,
///     })
///     .build()
/// ```
pub struct EnumBuilder<E: Enum> {
    id: &'static str,
    variants: Vec<Box<dyn VariantOps<E>>>,
}

impl<E: Enum> EnumBuilder<E> {
    /// Starts a builder for the record with the given qualified id.
    pub fn new(id: &'static str) -> EnumBuilder<E> {
        assert!(
            id.contains(':'),
            "record id must look like module.soia:Name, got {id:?}"
        );
        EnumBuilder {
            id,
            variants: Vec::new(),
        }
    }

    /// Declares a constant variant. `is` reports whether a value is this
    /// constant.
    pub fn constant(
        mut self,
        name: &'static str,
        number: u32,
        value: E,
        is: fn(&E) -> bool,
    ) -> EnumBuilder<E> {
        self.variants.push(Box::new(ConstantVariant {
            name,
            number,
            value,
            is,
        }));
        self
    }

    /// Declares a data variant. `wrap` builds the variant from a payload
    /// and `unwrap` borrows the payload back out, or `None` for other
    /// variants.
    pub fn variant<V: 'static>(
        mut self,
        name: &'static str,
        number: u32,
        serializer: Serializer<V>,
        wrap: fn(V) -> E,
        unwrap: fn(&E) -> Option<&V>,
    ) -> EnumBuilder<E> {
        self.variants.push(Box::new(DataVariant {
            name,
            number,
            serializer,
            wrap,
            unwrap,
        }));
        self
    }

    /// Finalizes the serializer. Panics on number 0 or duplicate metadata.
    pub fn build(self) -> Serializer<E> {
        let mut by_number = HashMap::new();
        let mut by_name = HashMap::new();
        for (position, variant) in self.variants.iter().enumerate() {
            assert!(
                variant.number() != 0,
                "variant number 0 is reserved for unknown in {}",
                self.id
            );
            assert!(
                by_number.insert(variant.number(), position).is_none(),
                "duplicate variant number {} in {}",
                variant.number(),
                self.id
            );
            assert!(
                by_name.insert(variant.name(), position).is_none(),
                "duplicate variant name {:?} in {}",
                variant.name(),
                self.id
            );
        }
        Serializer::from_ops(EnumOps {
            id: self.id,
            variants: self.variants,
            by_number,
            by_name,
        })
    }
}

/// Object-safe view of one variant, erasing its payload type.
trait VariantOps<E>: Send + Sync {
    fn name(&self) -> &'static str;
    fn number(&self) -> u32;
    fn matches(&self, value: &E) -> bool;
    /// The value this variant takes when decoded from its bare number:
    /// the constant itself, or the variant wrapping a default payload.
    fn from_bare_number(&self) -> E;
    /// Writes the full wire form; `value` is known to match.
    fn encode(&self, value: &E, writer: &mut Writer);
    /// Finishes decoding after the `247` marker and variant number.
    fn decode_payload(&self, reader: &mut Reader<'_>, keep: bool) -> Result<E, DecodeError>;
    /// `value` is known to match.
    fn to_json(&self, value: &E, flavor: JsonFlavor) -> Value;
    /// Builds the variant from the payload position of a two-element array
    /// or of a `{"kind", "value"}` object.
    fn payload_from_json(&self, value: &Value, keep: bool) -> Result<E, DecodeError>;
    fn payload_type(&self, registry: &mut RecordRegistry) -> Option<Type>;
}

struct ConstantVariant<E> {
    name: &'static str,
    number: u32,
    value: E,
    is: fn(&E) -> bool,
}

impl<E: Enum> VariantOps<E> for ConstantVariant<E> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn number(&self) -> u32 {
        self.number
    }

    fn matches(&self, value: &E) -> bool {
        (self.is)(value)
    }

    fn from_bare_number(&self) -> E {
        self.value.clone()
    }

    fn encode(&self, _value: &E, writer: &mut Writer) {
        encode::write_uint(writer, u64::from(self.number));
    }

    fn decode_payload(&self, reader: &mut Reader<'_>, _keep: bool) -> Result<E, DecodeError> {
        // A writer that knew this number as a data variant sent a payload;
        // step over it.
        decode::skip_value(reader)?;
        Ok(self.value.clone())
    }

    fn to_json(&self, _value: &E, flavor: JsonFlavor) -> Value {
        match flavor {
            JsonFlavor::Dense => Value::from(self.number),
            JsonFlavor::Readable => Value::String(self.name.to_owned()),
        }
    }

    fn payload_from_json(&self, _value: &Value, _keep: bool) -> Result<E, DecodeError> {
        Ok(self.value.clone())
    }

    fn payload_type(&self, _registry: &mut RecordRegistry) -> Option<Type> {
        None
    }
}

struct DataVariant<E, V> {
    name: &'static str,
    number: u32,
    serializer: Serializer<V>,
    wrap: fn(V) -> E,
    unwrap: fn(&E) -> Option<&V>,
}

impl<E: Enum, V: 'static> VariantOps<E> for DataVariant<E, V> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn number(&self) -> u32 {
        self.number
    }

    fn matches(&self, value: &E) -> bool {
        (self.unwrap)(value).is_some()
    }

    fn from_bare_number(&self) -> E {
        (self.wrap)(self.serializer.default_value())
    }

    fn encode(&self, value: &E, writer: &mut Writer) {
        writer.u8(wire::ENUM_VALUE);
        encode::write_varint(writer, u64::from(self.number));
        match (self.unwrap)(value) {
            Some(payload) => self.serializer.encode_slot(payload, writer),
            None => writer.u8(0),
        }
    }

    fn decode_payload(&self, reader: &mut Reader<'_>, keep: bool) -> Result<E, DecodeError> {
        Ok((self.wrap)(self.serializer.decode_value(reader, keep)?))
    }

    fn to_json(&self, value: &E, flavor: JsonFlavor) -> Value {
        let payload = match (self.unwrap)(value) {
            Some(payload) => self.serializer.json_slot(payload, flavor),
            None => Value::from(0),
        };
        match flavor {
            JsonFlavor::Dense => json!([self.number, payload]),
            JsonFlavor::Readable => json!({"kind": self.name, "value": payload}),
        }
    }

    fn payload_from_json(&self, value: &Value, keep: bool) -> Result<E, DecodeError> {
        Ok((self.wrap)(self.serializer.from_json_with(value, keep)?))
    }

    fn payload_type(&self, registry: &mut RecordRegistry) -> Option<Type> {
        Some(self.serializer.type_signature(registry))
    }
}

struct EnumOps<E: Enum> {
    id: &'static str,
    /// Declaration order.
    variants: Vec<Box<dyn VariantOps<E>>>,
    by_number: HashMap<u32, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl<E: Enum> EnumOps<E> {
    fn by_number(&self, number: u64) -> Option<&dyn VariantOps<E>> {
        let number = u32::try_from(number).ok()?;
        self.by_number
            .get(&number)
            .map(|&position| self.variants[position].as_ref())
    }

    fn by_name(&self, name: &str) -> Option<&dyn VariantOps<E>> {
        self.by_name
            .get(name)
            .map(|&position| self.variants[position].as_ref())
    }

    fn unknown_binary(&self, keep: bool, raw: &[u8]) -> E {
        let raw = keep.then(|| UnrecognizedEnum::from_binary(raw.to_vec()));
        E::from_unrecognized(raw.unwrap_or_default())
    }

    fn unknown_json(&self, keep: bool, raw: &Value) -> E {
        let raw = keep.then(|| UnrecognizedEnum::from_json(raw.clone()));
        E::from_unrecognized(raw.unwrap_or_default())
    }
}

impl<E: Enum> SerializerOps<E> for EnumOps<E> {
    fn default_value(&self) -> E {
        E::from_unrecognized(UnrecognizedEnum::default())
    }

    // The unknown variant is the default, but one carrying captured data
    // must still hit the wire, so only the empty unknown counts.
    fn is_default(&self, value: &E) -> bool {
        value
            .unrecognized()
            .is_some_and(|unrecognized| unrecognized.is_empty())
    }

    fn encode(&self, value: &E, writer: &mut Writer) {
        if let Some(unrecognized) = value.unrecognized() {
            match &unrecognized.raw {
                RawVariant::Binary(raw) => writer.buf(raw),
                _ => writer.u8(0),
            }
            return;
        }
        for variant in &self.variants {
            if variant.matches(value) {
                variant.encode(value, writer);
                return;
            }
        }
        writer.u8(0);
    }

    fn decode(&self, reader: &mut Reader<'_>, keep: bool) -> Result<E, DecodeError> {
        let start = reader.pos;
        if reader.peek()? == wire::ENUM_VALUE {
            reader.skip(1)?;
            let number = decode::read_varint(reader)?;
            match self.by_number(number) {
                Some(variant) => variant.decode_payload(reader, keep),
                None => {
                    decode::skip_value(reader)?;
                    Ok(self.unknown_binary(keep, &reader.data[start..reader.pos]))
                }
            }
        } else {
            let number = decode::read_u64(reader)?;
            match self.by_number(number) {
                Some(variant) => Ok(variant.from_bare_number()),
                None if number == 0 => Ok(self.default_value()),
                None => Ok(self.unknown_binary(keep, &reader.data[start..reader.pos])),
            }
        }
    }

    fn to_json(&self, value: &E, flavor: JsonFlavor) -> Value {
        if let Some(unrecognized) = value.unrecognized() {
            return match (&unrecognized.raw, flavor) {
                (RawVariant::Json(raw), JsonFlavor::Dense) => raw.clone(),
                (_, JsonFlavor::Dense) => Value::from(0),
                (_, JsonFlavor::Readable) => Value::String("?".to_owned()),
            };
        }
        for variant in &self.variants {
            if variant.matches(value) {
                return variant.to_json(value, flavor);
            }
        }
        Value::from(0)
    }

    fn from_json(&self, value: &Value, keep: bool) -> Result<E, DecodeError> {
        match value {
            Value::Number(_) => {
                let number = literals::json_to_u64(value)?;
                match self.by_number(number) {
                    Some(variant) => Ok(variant.from_bare_number()),
                    None if number == 0 => Ok(self.default_value()),
                    None => Ok(self.unknown_json(keep, value)),
                }
            }
            Value::String(name) => match self.by_name(name) {
                Some(variant) => Ok(variant.from_bare_number()),
                None if name == "?" => Ok(self.default_value()),
                None => Ok(self.unknown_json(keep, value)),
            },
            Value::Array(parts) if parts.len() == 2 => {
                let variant = match &parts[0] {
                    Value::Number(_) => self.by_number(literals::json_to_u64(&parts[0])?),
                    Value::String(name) => self.by_name(name),
                    tag => return Err(literals::mismatch("variant number or name", tag)),
                };
                match variant {
                    Some(variant) => variant.payload_from_json(&parts[1], keep),
                    None => Ok(self.unknown_json(keep, value)),
                }
            }
            Value::Object(object) => {
                let kind = object
                    .get("kind")
                    .and_then(Value::as_str)
                    .ok_or(DecodeError::JsonTypeMismatch {
                        expected: "kind",
                        found: "nothing",
                    })?;
                match (self.by_name(kind), object.get("value")) {
                    (Some(variant), Some(payload)) => variant.payload_from_json(payload, keep),
                    (Some(variant), None) => Ok(variant.from_bare_number()),
                    (None, _) => Ok(self.unknown_json(keep, value)),
                }
            }
            _ => Err(literals::mismatch("enum", value)),
        }
    }

    fn type_signature(&self, registry: &mut RecordRegistry) -> Type {
        if registry.claim(self.id) {
            let fields = self
                .variants
                .iter()
                .map(|variant| FieldDescriptor {
                    name: variant.name().to_owned(),
                    number: variant.number(),
                    ty: variant.payload_type(registry),
                })
                .collect();
            registry.fill(RecordDescriptor {
                kind: RecordKind::Enum,
                id: self.id.to_owned(),
                fields,
            });
        }
        Type::Record(self.id.to_owned())
    }
}
