//! Fixed-width, variable-length, floating-point, byte-string and time codecs.
//!
//! All multi-byte fixed-width values are little-endian.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat};
use eosabi_core::Value;

use crate::{cursor::Cursor, error::CodecError};

/// 2000-01-01T00:00:00Z in Unix milliseconds.
const BLOCK_TIMESTAMP_EPOCH_MS: i64 = 946_684_800_000;
const BLOCK_INTERVAL_MS: i64 = 500;

pub fn decode_bool(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::Bool(c.read_u8()? != 0))
}

pub fn decode_i8(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I8(c.read_i8()?))
}

pub fn decode_u8(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U8(c.read_u8()?))
}

pub fn decode_i16(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I16(c.read_i16_le()?))
}

pub fn decode_u16(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U16(c.read_u16_le()?))
}

pub fn decode_i32(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I32(c.read_i32_le()?))
}

pub fn decode_u32(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U32(c.read_u32_le()?))
}

pub fn decode_i64(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I64(c.read_i64_le()?))
}

pub fn decode_u64(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U64(c.read_u64_le()?))
}

pub fn decode_i128(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I128(c.read_i128_le()?))
}

pub fn decode_u128(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U128(c.read_u128_le()?))
}

pub fn decode_varuint32(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U32(c.read_varuint32()?))
}

/// Two's-complement reinterpretation of the unsigned varint; not zig-zag.
pub fn decode_varint32(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::I32(c.read_varuint32()? as i32))
}

pub fn decode_f32(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::F32(f32::from_bits(c.read_u32_le()?)))
}

pub fn decode_f64(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::F64(f64::from_bits(c.read_u64_le()?)))
}

/// There is no native quad-precision float; the raw bits pass through.
pub fn decode_f128(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::U128(c.read_u128_le()?))
}

pub fn decode_bytes(c: &mut Cursor) -> Result<Value, CodecError> {
    let len = c.read_varuint32()? as usize;
    let data = c.read_bytes(len)?;
    Ok(Value::Bytes(Arc::from(data.as_ref())))
}

pub fn decode_string(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let len = c.read_varuint32()? as usize;
    let data = c.read_bytes(len)?;
    let s = std::str::from_utf8(&data)
        .map_err(|e| CodecError::invalid(start, format!("invalid UTF-8: {e}")))?;
    Ok(Value::string(s))
}

/// Signed microseconds since the Unix epoch.
pub fn decode_time_point(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let micros = c.read_i64_le()?;
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    format_timestamp(secs, nanos).ok_or_else(|| out_of_range(start, micros))
}

/// Signed seconds since the Unix epoch, carried in eight bytes.
pub fn decode_time_point_sec(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let secs = c.read_i64_le()?;
    format_timestamp(secs, 0).ok_or_else(|| out_of_range(start, secs))
}

/// Half-second slots since 2000-01-01T00:00:00Z.
pub fn decode_block_timestamp(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let slot = c.read_u32_le()?;
    let millis = i64::from(slot) * BLOCK_INTERVAL_MS + BLOCK_TIMESTAMP_EPOCH_MS;
    let secs = millis.div_euclid(1_000);
    let nanos = (millis.rem_euclid(1_000) * 1_000_000) as u32;
    format_timestamp(secs, nanos).ok_or_else(|| out_of_range(start, i64::from(slot)))
}

fn format_timestamp(secs: i64, nanos: u32) -> Option<Value> {
    let dt = DateTime::from_timestamp(secs, nanos)?;
    Some(Value::string(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}

fn out_of_range(offset: usize, raw: i64) -> CodecError {
    CodecError::invalid(offset, format!("timestamp out of range: {raw}"))
}
