//! Byte buffer primitives shared by the soia binary codec.
//!
//! [`Writer`] is an auto-growing output buffer; [`Reader`] is a
//! bounds-checked cursor over a byte slice. All multi-byte values are
//! little-endian, matching the soia wire format.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Errors produced by [`Reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A read was attempted past the end of the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// A string read did not contain valid UTF-8.
    #[error("invalid utf-8 sequence")]
    InvalidUtf8,
}
