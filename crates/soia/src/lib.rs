//! Runtime for types generated by the soia schema compiler.
//!
//! Each generated type carries a [`Serializer`] that speaks three
//! interchangeable representations:
//!
//! - compact binary, for machine-to-machine traffic and storage;
//! - dense JSON, positional arrays keyed by field number;
//! - readable JSON, field-named objects for humans and debugging.
//!
//! Schemas evolve: fields and variants can be added or retired without
//! breaking existing traffic. Old readers skip data they do not know, and
//! the `keep_unrecognized` decode variants capture it so that re-encoding
//! reproduces the input. Every serializer can also describe its type at
//! runtime through [`Serializer::type_descriptor`].
//!
//! Application code rarely builds serializers by hand; generated code
//! assembles them from the constructors in this crate:
//!
//! ```
//! use soia::{array_serializer, int32_serializer, optional_serializer};
//!
//! let serializer = array_serializer(optional_serializer(int32_serializer()));
//! let value = vec![Some(8), None];
//! let bytes = serializer.to_bytes(&value);
//! assert_eq!(serializer.from_bytes(&bytes).unwrap(), value);
//! assert_eq!(serializer.to_json_code(&value), "[8,null]");
//! ```

mod binary;
mod error;
mod json;
mod keyed_array;
mod record;
mod serializer;
mod serializers;
mod timestamp;
mod unrecognized;

pub mod reflect;

pub use error::{DecodeError, SchemaViolation};
pub use keyed_array::KeyedArray;
pub use record::{Enum, Struct};
pub use serializer::Serializer;
pub use serializers::{
    array_serializer, bool_serializer, bytes_serializer, float32_serializer, float64_serializer,
    int32_serializer, int64_serializer, keyed_array_serializer, lazy_serializer,
    optional_serializer, string_serializer, timestamp_serializer, uint64_serializer, EnumBuilder,
    StructBuilder,
};
pub use timestamp::Timestamp;
pub use unrecognized::{UnrecognizedEnum, UnrecognizedFields};
