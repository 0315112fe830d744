//! Writers for each wire value family.
//!
//! Integers always take their smallest form, so any given integer value has
//! exactly one encoding. Floats and timestamps keep their fixed-width form
//! even when an integer form would be shorter.

use soia_buffers::Writer;

use super::wire;

/// Writes an unsigned LEB128 varint.
pub(crate) fn write_varint(writer: &mut Writer, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            writer.u8(byte);
            return;
        }
        writer.u8(byte | 0x80);
    }
}

/// Writes a non-negative integer in its smallest wire form.
pub(crate) fn write_uint(writer: &mut Writer, value: u64) {
    if value <= u64::from(wire::MAX_INLINE_UINT) {
        writer.u8(value as u8);
    } else if value <= u64::from(u16::MAX) {
        writer.u8(wire::UINT16);
        writer.u16(value as u16);
    } else if value <= u64::from(u32::MAX) {
        writer.u8(wire::UINT32);
        writer.u32(value as u32);
    } else {
        writer.u8(wire::UINT64);
        writer.u64(value);
    }
}

/// Writes a signed integer in its smallest wire form.
pub(crate) fn write_int(writer: &mut Writer, value: i64) {
    if value >= 0 {
        write_uint(writer, value as u64);
    } else if value >= i64::from(i8::MIN) {
        writer.u8(wire::INT8);
        writer.i8(value as i8);
    } else if value >= i64::from(i16::MIN) {
        writer.u8(wire::INT16);
        writer.i16(value as i16);
    } else if value >= i64::from(i32::MIN) {
        writer.u8(wire::INT32);
        writer.i32(value as i32);
    } else {
        writer.u8(wire::INT64);
        writer.i64(value);
    }
}

pub(crate) fn write_float32(writer: &mut Writer, value: f32) {
    writer.u8(wire::FLOAT32);
    writer.f32(value);
}

pub(crate) fn write_float64(writer: &mut Writer, value: f64) {
    writer.u8(wire::FLOAT64);
    writer.f64(value);
}

pub(crate) fn write_timestamp(writer: &mut Writer, unix_millis: i64) {
    writer.u8(wire::TIMESTAMP);
    writer.i64(unix_millis);
}

pub(crate) fn write_string(writer: &mut Writer, value: &str) {
    writer.u8(wire::STRING);
    write_varint(writer, value.len() as u64);
    writer.utf8(value);
}

pub(crate) fn write_bytes(writer: &mut Writer, value: &[u8]) {
    writer.u8(wire::BYTES);
    write_varint(writer, value.len() as u64);
    writer.buf(value);
}
