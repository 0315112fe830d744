//! Wire marker bytes.

/// Largest integer stored inline in the marker byte itself.
pub(crate) const MAX_INLINE_UINT: u8 = 231;

// Fixed-width scalars. Signed markers are only emitted for negative values;
// non-negative integers always take the unsigned forms above or below.
pub(crate) const UINT16: u8 = 232;
pub(crate) const UINT32: u8 = 233;
pub(crate) const UINT64: u8 = 234;
pub(crate) const INT8: u8 = 235;
pub(crate) const INT16: u8 = 236;
pub(crate) const INT32: u8 = 237;
pub(crate) const INT64: u8 = 238;
/// Timestamp payload is an i64 count of unix milliseconds.
pub(crate) const TIMESTAMP: u8 = 239;
pub(crate) const FLOAT32: u8 = 240;
pub(crate) const FLOAT64: u8 = 241;

// Length-prefixed values: varint byte length, then the raw bytes.
pub(crate) const STRING: u8 = 242;
pub(crate) const BYTES: u8 = 243;

// Composite values: varint element count, then that many values.
pub(crate) const ARRAY: u8 = 244;
pub(crate) const STRUCT: u8 = 245;

/// An optional with no value.
pub(crate) const ABSENT: u8 = 246;
/// Enum data variant: varint variant number, then the payload value.
pub(crate) const ENUM_VALUE: u8 = 247;
/// Opaque envelope: varint byte length, then one complete encoded value.
/// Decoders unwrap it transparently wherever a value is expected.
pub(crate) const OPAQUE: u8 = 248;

// Markers 249 through 255 are reserved and rejected by decoders.
