//! The closed set of builtin scalar types and their codecs.

use std::{collections::HashMap, sync::LazyLock};

use eosabi_core::Value;

use crate::{asset, cursor::Cursor, error::CodecError, key, name, primitive};

/// Decoding function for one builtin scalar.
pub type Codec = fn(&mut Cursor) -> Result<Value, CodecError>;

/// Builtin scalar type names recognized by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Int128,
    Uint128,
    VarInt32,
    VarUint32,
    Float32,
    Float64,
    Float128,
    TimePoint,
    TimePointSec,
    BlockTimestamp,
    Name,
    Bytes,
    String,
    Checksum160,
    Checksum256,
    Checksum512,
    PublicKey,
    Signature,
    Symbol,
    SymbolCode,
    Asset,
    ExtendedAsset,
}

static BUILTINS: LazyLock<HashMap<&'static str, (BuiltinType, Codec)>> = LazyLock::new(|| {
    BuiltinType::ALL
        .iter()
        .map(|ty| (ty.name(), (*ty, ty.codec())))
        .collect()
});

impl BuiltinType {
    pub const ALL: [BuiltinType; 31] = [
        BuiltinType::Bool,
        BuiltinType::Int8,
        BuiltinType::Uint8,
        BuiltinType::Int16,
        BuiltinType::Uint16,
        BuiltinType::Int32,
        BuiltinType::Uint32,
        BuiltinType::Int64,
        BuiltinType::Uint64,
        BuiltinType::Int128,
        BuiltinType::Uint128,
        BuiltinType::VarInt32,
        BuiltinType::VarUint32,
        BuiltinType::Float32,
        BuiltinType::Float64,
        BuiltinType::Float128,
        BuiltinType::TimePoint,
        BuiltinType::TimePointSec,
        BuiltinType::BlockTimestamp,
        BuiltinType::Name,
        BuiltinType::Bytes,
        BuiltinType::String,
        BuiltinType::Checksum160,
        BuiltinType::Checksum256,
        BuiltinType::Checksum512,
        BuiltinType::PublicKey,
        BuiltinType::Signature,
        BuiltinType::Symbol,
        BuiltinType::SymbolCode,
        BuiltinType::Asset,
        BuiltinType::ExtendedAsset,
    ];

    /// Look up a builtin by its ABI type name.
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTINS.get(name).map(|(ty, _)| *ty)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Bool => "bool",
            BuiltinType::Int8 => "int8",
            BuiltinType::Uint8 => "uint8",
            BuiltinType::Int16 => "int16",
            BuiltinType::Uint16 => "uint16",
            BuiltinType::Int32 => "int32",
            BuiltinType::Uint32 => "uint32",
            BuiltinType::Int64 => "int64",
            BuiltinType::Uint64 => "uint64",
            BuiltinType::Int128 => "int128",
            BuiltinType::Uint128 => "uint128",
            BuiltinType::VarInt32 => "varint32",
            BuiltinType::VarUint32 => "varuint32",
            BuiltinType::Float32 => "float32",
            BuiltinType::Float64 => "float64",
            BuiltinType::Float128 => "float128",
            BuiltinType::TimePoint => "time_point",
            BuiltinType::TimePointSec => "time_point_sec",
            BuiltinType::BlockTimestamp => "block_timestamp_type",
            BuiltinType::Name => "name",
            BuiltinType::Bytes => "bytes",
            BuiltinType::String => "string",
            BuiltinType::Checksum160 => "checksum160",
            BuiltinType::Checksum256 => "checksum256",
            BuiltinType::Checksum512 => "checksum512",
            BuiltinType::PublicKey => "public_key",
            BuiltinType::Signature => "signature",
            BuiltinType::Symbol => "symbol",
            BuiltinType::SymbolCode => "symbol_code",
            BuiltinType::Asset => "asset",
            BuiltinType::ExtendedAsset => "extended_asset",
        }
    }

    fn codec(self) -> Codec {
        match self {
            BuiltinType::Bool => primitive::decode_bool,
            BuiltinType::Int8 => primitive::decode_i8,
            BuiltinType::Uint8 => primitive::decode_u8,
            BuiltinType::Int16 => primitive::decode_i16,
            BuiltinType::Uint16 => primitive::decode_u16,
            BuiltinType::Int32 => primitive::decode_i32,
            BuiltinType::Uint32 => primitive::decode_u32,
            BuiltinType::Int64 => primitive::decode_i64,
            BuiltinType::Uint64 => primitive::decode_u64,
            BuiltinType::Int128 => primitive::decode_i128,
            BuiltinType::Uint128 => primitive::decode_u128,
            BuiltinType::VarInt32 => primitive::decode_varint32,
            BuiltinType::VarUint32 => primitive::decode_varuint32,
            BuiltinType::Float32 => primitive::decode_f32,
            BuiltinType::Float64 => primitive::decode_f64,
            BuiltinType::Float128 => primitive::decode_f128,
            BuiltinType::TimePoint => primitive::decode_time_point,
            BuiltinType::TimePointSec => primitive::decode_time_point_sec,
            BuiltinType::BlockTimestamp => primitive::decode_block_timestamp,
            BuiltinType::Name => name::decode_name,
            BuiltinType::Bytes => primitive::decode_bytes,
            BuiltinType::String => primitive::decode_string,
            BuiltinType::Checksum160 => key::decode_checksum160,
            BuiltinType::Checksum256 => key::decode_checksum256,
            BuiltinType::Checksum512 => key::decode_checksum512,
            BuiltinType::PublicKey => key::decode_public_key,
            BuiltinType::Signature => key::decode_signature,
            BuiltinType::Symbol => asset::decode_symbol,
            BuiltinType::SymbolCode => asset::decode_symbol_code,
            BuiltinType::Asset => asset::decode_asset,
            BuiltinType::ExtendedAsset => asset::decode_extended_asset,
        }
    }

    /// Decode one value of this type from `cursor`.
    pub fn decode(self, cursor: &mut Cursor) -> Result<Value, CodecError> {
        (self.codec())(cursor)
    }
}

/// Decode a builtin scalar by name; `None` if `name` is not a builtin.
pub fn decode_builtin(name: &str, cursor: &mut Cursor) -> Option<Result<Value, CodecError>> {
    BUILTINS.get(name).map(|(_, codec)| codec(cursor))
}
