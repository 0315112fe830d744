//! Readers for each wire value family, plus the skip routine that steps over
//! values of unknown type.

use soia_buffers::Reader;

use super::wire;
use crate::error::DecodeError;

/// Reads an unsigned LEB128 varint of at most 10 bytes.
pub(crate) fn read_varint(reader: &mut Reader) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    for i in 0..10 {
        let byte = reader.u8()?;
        if i == 9 && byte & 0xfe != 0 {
            // The 10th byte may only contribute the 64th bit.
            return Err(DecodeError::InvalidVarint);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::InvalidVarint)
}

/// Reads a varint length or count prefix as a usize.
pub(crate) fn read_length(reader: &mut Reader) -> Result<usize, DecodeError> {
    let length = read_varint(reader)?;
    // A length that does not fit in usize cannot be backed by real input.
    usize::try_from(length).map_err(|_| DecodeError::UnexpectedEof)
}

/// Reads any numeric wire value as u64, wrapping negatives and truncating
/// floats.
pub(crate) fn read_u64(reader: &mut Reader) -> Result<u64, DecodeError> {
    read_i64(reader).map(|value| value as u64)
}

/// Reads any numeric wire value as i64. Floats truncate toward zero and
/// out-of-range u64 values wrap.
pub(crate) fn read_i64(reader: &mut Reader) -> Result<i64, DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0..=wire::MAX_INLINE_UINT => Ok(i64::from(marker)),
        wire::UINT16 => Ok(i64::from(reader.u16()?)),
        wire::UINT32 => Ok(i64::from(reader.u32()?)),
        wire::UINT64 => Ok(reader.u64()? as i64),
        wire::INT8 => Ok(i64::from(reader.i8()?)),
        wire::INT16 => Ok(i64::from(reader.i16()?)),
        wire::INT32 => Ok(i64::from(reader.i32()?)),
        wire::INT64 | wire::TIMESTAMP => Ok(reader.i64()?),
        wire::FLOAT32 => Ok(reader.f32()? as i64),
        wire::FLOAT64 => Ok(reader.f64()? as i64),
        marker => Err(DecodeError::WireTypeMismatch {
            expected: "number",
            marker,
        }),
    }
}

/// Reads any numeric wire value as f64.
pub(crate) fn read_f64(reader: &mut Reader) -> Result<f64, DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0..=wire::MAX_INLINE_UINT => Ok(f64::from(marker)),
        wire::UINT16 => Ok(f64::from(reader.u16()?)),
        wire::UINT32 => Ok(f64::from(reader.u32()?)),
        wire::UINT64 => Ok(reader.u64()? as f64),
        wire::INT8 => Ok(f64::from(reader.i8()?)),
        wire::INT16 => Ok(f64::from(reader.i16()?)),
        wire::INT32 => Ok(f64::from(reader.i32()?)),
        wire::INT64 | wire::TIMESTAMP => Ok(reader.i64()? as f64),
        wire::FLOAT32 => Ok(f64::from(reader.f32()?)),
        wire::FLOAT64 => Ok(reader.f64()?),
        marker => Err(DecodeError::WireTypeMismatch {
            expected: "number",
            marker,
        }),
    }
}

pub(crate) fn read_string(reader: &mut Reader) -> Result<String, DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0 => Ok(String::new()),
        wire::STRING => {
            let length = read_length(reader)?;
            Ok(reader.utf8(length)?.to_owned())
        }
        marker => Err(DecodeError::WireTypeMismatch {
            expected: "string",
            marker,
        }),
    }
}

pub(crate) fn read_byte_string(reader: &mut Reader) -> Result<Vec<u8>, DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0 => Ok(Vec::new()),
        wire::BYTES => {
            let length = read_length(reader)?;
            Ok(reader.buf(length)?.to_vec())
        }
        marker => Err(DecodeError::WireTypeMismatch {
            expected: "bytes",
            marker,
        }),
    }
}

/// Steps over one complete value without interpreting it.
pub(crate) fn skip_value(reader: &mut Reader) -> Result<(), DecodeError> {
    let marker = reader.u8()?;
    match marker {
        0..=wire::MAX_INLINE_UINT | wire::ABSENT => Ok(()),
        wire::INT8 => Ok(reader.skip(1)?),
        wire::UINT16 | wire::INT16 => Ok(reader.skip(2)?),
        wire::UINT32 | wire::INT32 | wire::FLOAT32 => Ok(reader.skip(4)?),
        wire::UINT64 | wire::INT64 | wire::TIMESTAMP | wire::FLOAT64 => Ok(reader.skip(8)?),
        wire::STRING | wire::BYTES | wire::OPAQUE => {
            let length = read_length(reader)?;
            Ok(reader.skip(length)?)
        }
        wire::ARRAY | wire::STRUCT => {
            let count = read_length(reader)?;
            for _ in 0..count {
                skip_value(reader)?;
            }
            Ok(())
        }
        wire::ENUM_VALUE => {
            read_varint(reader)?;
            skip_value(reader)
        }
        marker => Err(DecodeError::InvalidWireMarker(marker)),
    }
}

/// Steps over one complete value and returns the raw bytes it occupied.
pub(crate) fn capture_value<'a>(reader: &mut Reader<'a>) -> Result<&'a [u8], DecodeError> {
    let start = reader.pos;
    skip_value(reader)?;
    Ok(&reader.data[start..reader.pos])
}
