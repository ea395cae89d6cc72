//! Base-32 account/action name codec.

use eosabi_core::Value;

use crate::{cursor::Cursor, error::CodecError};

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Render a 64-bit name as up to 13 characters, trailing dots removed.
///
/// The lowest 4 bits form the 13th character; every other character takes
/// 5 bits, working upward from there.
pub fn name_to_string(value: u64) -> String {
    let mut out = [b'.'; 13];
    let mut v = value;
    for i in 0..13 {
        let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
        out[12 - i] = CHARMAP[(v & mask) as usize];
        v >>= shift;
    }
    let len = out.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
    out[..len].iter().map(|&c| c as char).collect()
}

pub fn decode_name(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::string(name_to_string(c.read_u64_le()?)))
}
