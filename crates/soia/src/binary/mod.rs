//! The soia binary wire format.
//!
//! Every encoded value starts with one marker byte. Markers 0 through 231
//! are small non-negative integers encoded inline; higher markers select a
//! fixed-width or length-prefixed layout for the bytes that follow. All
//! multi-byte scalars are little-endian and all length prefixes are unsigned
//! LEB128 varints, which makes every value self-delimiting: a decoder can
//! skip a value it does not understand without knowing its type.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod wire;
