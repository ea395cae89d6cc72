//! Symbol, asset and extended-asset codecs.

use std::fmt;

use eosabi_core::Value;

use crate::{cursor::Cursor, error::CodecError, name::name_to_string};

pub const MAX_PRECISION: u8 = 18;

/// A `(precision, ticker)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub precision: u8,
    pub code: String,
}

impl Symbol {
    fn read(c: &mut Cursor) -> Result<Self, CodecError> {
        let start = c.offset();
        let raw = c.read_array::<8>()?;
        let precision = raw[0];
        if precision > MAX_PRECISION {
            return Err(CodecError::invalid(
                start,
                format!("symbol precision {precision} exceeds {MAX_PRECISION}"),
            ));
        }
        Ok(Self {
            precision,
            code: ticker(&raw[1..], start)?,
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

/// An amount rendered as a fixed-point decimal with its ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub amount: u64,
    pub symbol: Symbol,
}

impl Asset {
    fn read(c: &mut Cursor) -> Result<Self, CodecError> {
        let amount = c.read_u64_le()?;
        let symbol = Symbol::read(c)?;
        Ok(Self { amount, symbol })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.amount.to_string();
        let precision = usize::from(self.symbol.precision);
        if precision == 0 {
            return write!(f, "{digits} {}", self.symbol.code);
        }
        let padded = format!("{digits:0>width$}", width = precision + 1);
        let (int, frac) = padded.split_at(padded.len() - precision);
        write!(f, "{int}.{frac} {}", self.symbol.code)
    }
}

fn ticker(raw: &[u8], offset: usize) -> Result<String, CodecError> {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    std::str::from_utf8(&raw[..end])
        .map(str::to_string)
        .map_err(|e| CodecError::invalid(offset, format!("invalid symbol code: {e}")))
}

pub fn decode_symbol(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::string(Symbol::read(c)?.to_string()))
}

/// Reads bytes 1..8 of the 8-byte field; byte 0 is skipped as in `symbol`.
pub fn decode_symbol_code(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let raw = c.read_array::<8>()?;
    Ok(Value::string(ticker(&raw[1..], start)?))
}

pub fn decode_asset(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::string(Asset::read(c)?.to_string()))
}

pub fn decode_extended_asset(c: &mut Cursor) -> Result<Value, CodecError> {
    let quantity = Asset::read(c)?;
    let contract = name_to_string(c.read_u64_le()?);
    Ok(Value::Struct(vec![
        ("quantity".to_string(), Value::string(quantity.to_string())),
        ("contract".to_string(), Value::string(contract)),
    ]))
}
