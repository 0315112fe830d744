//! Errors reported by decoders and by schema descriptor validation.

use thiserror::Error;

use soia_buffers::BufferError;

/// Error produced when a byte buffer or JSON document does not hold a valid
/// encoding of the expected type.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid wire marker {0}")]
    InvalidWireMarker(u8),
    #[error("wire type mismatch: expected {expected}, found marker {marker}")]
    WireTypeMismatch {
        expected: &'static str,
        marker: u8,
    },
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid utf-8 in string value")]
    InvalidUtf8,
    #[error("input continues past the end of the encoded value")]
    TrailingBytes,
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("json value mismatch: expected {expected}, found {found}")]
    JsonTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid base64 in bytes value: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::UnexpectedEof,
            BufferError::InvalidUtf8 => DecodeError::InvalidUtf8,
        }
    }
}

/// Error produced when a type descriptor document is structurally sound but
/// semantically invalid.
#[derive(Debug, Error)]
pub enum SchemaViolation {
    #[error("reference to unknown record {0:?}")]
    UnknownRecord(String),
    #[error("record {0:?} declared more than once")]
    DuplicateRecord(String),
    #[error("duplicate field number {number} in {record:?}")]
    DuplicateFieldNumber { record: String, number: u32 },
    #[error("duplicate field name {name:?} in {record:?}")]
    DuplicateFieldName { record: String, name: String },
    #[error("variant number 0 is reserved for unknown in {0:?}")]
    ReservedVariantNumber(String),
}
