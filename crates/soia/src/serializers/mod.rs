//! Serializer constructors for every shape a schema type can take.
//!
//! Generated code assembles the serializer for each of its types out of
//! these building blocks: primitive serializers at the leaves, the optional,
//! array and keyed-array combinators around them, and [`StructBuilder`] and
//! [`EnumBuilder`] for records. [`lazy_serializer`] breaks the construction
//! cycle of recursive schemas.

mod array;
mod enums;
mod lazy;
mod optional;
mod primitives;
mod structs;

pub use array::{array_serializer, keyed_array_serializer};
pub use enums::EnumBuilder;
pub use lazy::lazy_serializer;
pub use optional::optional_serializer;
pub use primitives::{
    bool_serializer, bytes_serializer, float32_serializer, float64_serializer, int32_serializer,
    int64_serializer, string_serializer, timestamp_serializer, uint64_serializer,
};
pub use structs::StructBuilder;
