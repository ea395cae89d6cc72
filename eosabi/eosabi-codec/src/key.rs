//! Checksum blobs, public keys and signatures.

use eosabi_core::Value;
use ripemd::{Digest, Ripemd160};

use crate::{cursor::Cursor, error::CodecError};

const KEY_TYPE_K1: u8 = 0;
const KEY_TYPE_R1: u8 = 1;

/// Base-58 encoding of `payload` followed by the first four bytes of
/// `RIPEMD160(payload || suffix)`.
pub fn base58_check_encode(payload: &[u8], suffix: &[u8]) -> String {
    let mut hasher = Ripemd160::new();
    hasher.update(payload);
    hasher.update(suffix);
    let digest = hasher.finalize();

    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&digest[..4]);
    bs58::encode(buf).into_string()
}

fn decode_checksum<const N: usize>(c: &mut Cursor) -> Result<Value, CodecError> {
    Ok(Value::bytes(c.read_array::<N>()?))
}

pub fn decode_checksum160(c: &mut Cursor) -> Result<Value, CodecError> {
    decode_checksum::<20>(c)
}

pub fn decode_checksum256(c: &mut Cursor) -> Result<Value, CodecError> {
    decode_checksum::<32>(c)
}

pub fn decode_checksum512(c: &mut Cursor) -> Result<Value, CodecError> {
    decode_checksum::<64>(c)
}

/// One key-type byte followed by a 33-byte compressed point.
pub fn decode_public_key(c: &mut Cursor) -> Result<Value, CodecError> {
    let start = c.offset();
    let raw = c.read_array::<34>()?;
    let point = &raw[1..];
    let text = match raw[0] {
        KEY_TYPE_K1 => format!("EOS{}", base58_check_encode(point, b"")),
        KEY_TYPE_R1 => format!("PUB_R1_{}", base58_check_encode(point, b"R1")),
        other => {
            return Err(CodecError::invalid(
                start,
                format!("unsupported public key type {other}"),
            ));
        }
    };
    Ok(Value::string(text))
}

pub fn decode_signature(c: &mut Cursor) -> Result<Value, CodecError> {
    let raw = c.read_array::<65>()?;
    Ok(Value::string(format!("SIG_{}", base58_check_encode(&raw, b""))))
}
