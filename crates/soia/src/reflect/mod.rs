//! Runtime schema reflection.
//!
//! Every serializer can describe the type it handles as a [`TypeDescriptor`]:
//! the root type reference plus the declaration of every struct and enum
//! reachable from it. Descriptors convert to and from a stable JSON document,
//! so a process that never saw the generating `.soia` file can still inspect
//! field names, numbers and types.

mod json;

use std::collections::HashMap;

/// The nine primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Timestamp,
    String,
    Bytes,
}

impl PrimitiveType {
    /// The name used in `.soia` files and descriptor documents.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Uint64 => "uint64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::Timestamp => "timestamp",
            PrimitiveType::String => "string",
            PrimitiveType::Bytes => "bytes",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<PrimitiveType> {
        Some(match name {
            "bool" => PrimitiveType::Bool,
            "int32" => PrimitiveType::Int32,
            "int64" => PrimitiveType::Int64,
            "uint64" => PrimitiveType::Uint64,
            "float32" => PrimitiveType::Float32,
            "float64" => PrimitiveType::Float64,
            "timestamp" => PrimitiveType::Timestamp,
            "string" => PrimitiveType::String,
            "bytes" => PrimitiveType::Bytes,
            _ => return None,
        })
    }
}

/// A reference to a type, as it appears in field declarations and at the
/// root of a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(PrimitiveType),
    Optional(Box<Type>),
    Array(ArrayType),
    /// A struct or enum, referenced by record id. The record itself lives in
    /// [`TypeDescriptor::records`].
    Record(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub item: Box<Type>,
    /// Path to the lookup key field, set only for keyed arrays. A path
    /// like `"user.id"` names one field per nesting level.
    pub key_chain: Option<String>,
}

/// Whether a record declares a struct or an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Struct,
    Enum,
}

/// One struct field or enum variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub number: u32,
    /// `None` for constant enum variants, which carry no data.
    pub ty: Option<Type>,
}

/// The declaration of one struct or enum.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    pub kind: RecordKind,
    /// Qualified id, e.g. `"weather.soia:Forecast"`.
    pub id: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Full description of one serializable type.
///
/// `records` holds every record reachable from [`ty`](TypeDescriptor::ty) in
/// depth-first discovery order, each exactly once, so two serializers for the
/// same type always produce identical descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    ty: Type,
    records: Vec<RecordDescriptor>,
}

impl TypeDescriptor {
    pub(crate) fn new(ty: Type, records: Vec<RecordDescriptor>) -> TypeDescriptor {
        TypeDescriptor { ty, records }
    }

    /// The root type reference.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Every record reachable from the root type.
    pub fn records(&self) -> &[RecordDescriptor] {
        &self.records
    }

    /// Looks up a record declaration by id.
    pub fn record(&self, id: &str) -> Option<&RecordDescriptor> {
        self.records.iter().find(|record| record.id == id)
    }
}

/// Collects record declarations while serializers describe themselves.
///
/// Records register in two steps so that recursive schemas terminate: a
/// serializer claims its id before describing its fields, and fills in the
/// declaration afterwards. A nested reference to an already-claimed id
/// resolves to the claim instead of recursing.
pub(crate) struct RecordRegistry {
    order: Vec<String>,
    filled: HashMap<String, RecordDescriptor>,
}

impl RecordRegistry {
    pub(crate) fn new() -> RecordRegistry {
        RecordRegistry {
            order: Vec::new(),
            filled: HashMap::new(),
        }
    }

    /// Reserves `id` at the next position in discovery order. Returns false
    /// when the id was already claimed, in which case the caller must not
    /// describe its fields again.
    pub(crate) fn claim(&mut self, id: &str) -> bool {
        if self.order.iter().any(|claimed| claimed == id) {
            return false;
        }
        self.order.push(id.to_owned());
        true
    }

    /// Supplies the declaration for a previously claimed id.
    pub(crate) fn fill(&mut self, record: RecordDescriptor) {
        self.filled.insert(record.id.clone(), record);
    }

    /// The collected declarations, in claim order.
    pub(crate) fn into_records(self) -> Vec<RecordDescriptor> {
        let mut filled = self.filled;
        self.order
            .into_iter()
            .filter_map(|id| filled.remove(&id))
            .collect()
    }
}
