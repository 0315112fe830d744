//! The JSON document form of type descriptors.
//!
//! The document layout is shared by every soia implementation:
//!
//! ```json
//! {
//!   "type": {"kind": "record", "value": "structs.soia:Point"},
//!   "records": [
//!     {
//!       "kind": "struct",
//!       "id": "structs.soia:Point",
//!       "fields": [
//!         {"name": "x", "number": 0, "type": {"kind": "primitive", "value": "int32"}}
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use serde_json::{json, Map, Value};

use super::{
    ArrayType, FieldDescriptor, PrimitiveType, RecordDescriptor, RecordKind, Type, TypeDescriptor,
};
use crate::error::{DecodeError, SchemaViolation};

impl TypeDescriptor {
    /// Builds the JSON document describing this type.
    pub fn as_json(&self) -> Value {
        json!({
            "type": type_to_json(&self.ty),
            "records": self.records.iter().map(record_to_json).collect::<Vec<_>>(),
        })
    }

    /// The JSON document as indented text.
    pub fn as_json_code(&self) -> String {
        let value = self.as_json();
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }

    /// Parses a descriptor document and validates that record references
    /// resolve and that declarations are well formed.
    pub fn from_json(value: &Value) -> Result<TypeDescriptor, DecodeError> {
        let object = as_object(value)?;
        let ty = type_from_json(require(object, "type")?)?;
        let mut records = Vec::new();
        if let Some(list) = object.get("records") {
            for record in as_array(list)? {
                records.push(record_from_json(record)?);
            }
        }
        let descriptor = TypeDescriptor { ty, records };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parses a descriptor document from JSON text.
    pub fn from_json_code(code: &str) -> Result<TypeDescriptor, DecodeError> {
        TypeDescriptor::from_json(&serde_json::from_str(code)?)
    }

    fn validate(&self) -> Result<(), SchemaViolation> {
        let mut ids: HashSet<&str> = HashSet::new();
        for record in &self.records {
            if !ids.insert(&record.id) {
                return Err(SchemaViolation::DuplicateRecord(record.id.clone()));
            }
            let mut numbers = HashSet::new();
            let mut names = HashSet::new();
            for field in &record.fields {
                if !numbers.insert(field.number) {
                    return Err(SchemaViolation::DuplicateFieldNumber {
                        record: record.id.clone(),
                        number: field.number,
                    });
                }
                if !names.insert(field.name.as_str()) {
                    return Err(SchemaViolation::DuplicateFieldName {
                        record: record.id.clone(),
                        name: field.name.clone(),
                    });
                }
                if record.kind == RecordKind::Enum && field.number == 0 {
                    return Err(SchemaViolation::ReservedVariantNumber(record.id.clone()));
                }
            }
        }
        check_references(&self.ty, &ids)?;
        for record in &self.records {
            for field in &record.fields {
                if let Some(ty) = &field.ty {
                    check_references(ty, &ids)?;
                }
            }
        }
        Ok(())
    }
}

fn check_references(ty: &Type, ids: &HashSet<&str>) -> Result<(), SchemaViolation> {
    match ty {
        Type::Primitive(_) => Ok(()),
        Type::Optional(inner) => check_references(inner, ids),
        Type::Array(array) => check_references(&array.item, ids),
        Type::Record(id) => {
            if ids.contains(id.as_str()) {
                Ok(())
            } else {
                Err(SchemaViolation::UnknownRecord(id.clone()))
            }
        }
    }
}

fn type_to_json(ty: &Type) -> Value {
    match ty {
        Type::Primitive(primitive) => json!({"kind": "primitive", "value": primitive.name()}),
        Type::Optional(inner) => json!({"kind": "optional", "value": type_to_json(inner)}),
        Type::Array(array) => {
            let mut value = Map::new();
            value.insert("item".to_owned(), type_to_json(&array.item));
            if let Some(key_chain) = &array.key_chain {
                value.insert("key_chain".to_owned(), Value::String(key_chain.clone()));
            }
            json!({"kind": "array", "value": value})
        }
        Type::Record(id) => json!({"kind": "record", "value": id}),
    }
}

fn record_to_json(record: &RecordDescriptor) -> Value {
    let kind = match record.kind {
        RecordKind::Struct => "struct",
        RecordKind::Enum => "enum",
    };
    json!({
        "kind": kind,
        "id": record.id,
        "fields": record.fields.iter().map(field_to_json).collect::<Vec<_>>(),
    })
}

fn field_to_json(field: &FieldDescriptor) -> Value {
    let mut object = Map::new();
    object.insert("name".to_owned(), Value::String(field.name.clone()));
    object.insert("number".to_owned(), Value::from(field.number));
    if let Some(ty) = &field.ty {
        object.insert("type".to_owned(), type_to_json(ty));
    }
    Value::Object(object)
}

fn type_from_json(value: &Value) -> Result<Type, DecodeError> {
    let object = as_object(value)?;
    let kind = as_str(require(object, "kind")?)?;
    let inner = require(object, "value")?;
    match kind {
        "primitive" => {
            let name = as_str(inner)?;
            PrimitiveType::from_name(name)
                .map(Type::Primitive)
                .ok_or(DecodeError::JsonTypeMismatch {
                    expected: "primitive type name",
                    found: "string",
                })
        }
        "optional" => Ok(Type::Optional(Box::new(type_from_json(inner)?))),
        "array" => {
            let object = as_object(inner)?;
            let item = Box::new(type_from_json(require(object, "item")?)?);
            let key_chain = match object.get("key_chain") {
                Some(value) => Some(as_str(value)?.to_owned()),
                None => None,
            };
            Ok(Type::Array(ArrayType { item, key_chain }))
        }
        "record" => Ok(Type::Record(as_str(inner)?.to_owned())),
        _ => Err(DecodeError::JsonTypeMismatch {
            expected: "type kind",
            found: "string",
        }),
    }
}

fn record_from_json(value: &Value) -> Result<RecordDescriptor, DecodeError> {
    let object = as_object(value)?;
    let kind = match as_str(require(object, "kind")?)? {
        "struct" => RecordKind::Struct,
        "enum" => RecordKind::Enum,
        _ => {
            return Err(DecodeError::JsonTypeMismatch {
                expected: "record kind",
                found: "string",
            })
        }
    };
    let id = as_str(require(object, "id")?)?.to_owned();
    let mut fields = Vec::new();
    if let Some(list) = object.get("fields") {
        for field in as_array(list)? {
            fields.push(field_from_json(field)?);
        }
    }
    Ok(RecordDescriptor { kind, id, fields })
}

fn field_from_json(value: &Value) -> Result<FieldDescriptor, DecodeError> {
    let object = as_object(value)?;
    let name = as_str(require(object, "name")?)?.to_owned();
    let number = require(object, "number")?
        .as_u64()
        .and_then(|number| u32::try_from(number).ok())
        .ok_or(DecodeError::JsonTypeMismatch {
            expected: "field number",
            found: "number",
        })?;
    let ty = match object.get("type") {
        Some(ty) => Some(type_from_json(ty)?),
        None => None,
    };
    Ok(FieldDescriptor { name, number, ty })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| crate::json::literals::mismatch("object", value))
}

fn as_array(value: &Value) -> Result<&[Value], DecodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| crate::json::literals::mismatch("array", value))
}

fn as_str(value: &Value) -> Result<&str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| crate::json::literals::mismatch("string", value))
}

fn require<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Value, DecodeError> {
    object.get(key).ok_or(DecodeError::JsonTypeMismatch {
        expected: key,
        found: "nothing",
    })
}
