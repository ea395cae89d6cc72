//! ABI-driven decoder for EOSIO action payloads.
//!
//! # Pipeline
//!
//! ```text
//! schema bytes (ABI JSON)
//!   └─ Abi::from_json         : serde model → validated, indexed Abi
//!       └─ Abi::resolve_type  : action binding + alias chain
//!           └─ Dispatcher     : array / optional / builtin / struct → Value
//! ```
//!
//! [`decode_action`] runs the whole pipeline once. [`AbiDecoder`] keeps a
//! loaded ABI for repeated and parallel use, and [`AbiRegistry`] keys
//! decoders by contract account.

mod abi_def;
mod decoder;
mod dispatch;
mod error;
mod registry;

pub use abi_def::{abi_from_binary, decode_abi_def};
pub use decoder::{AbiDecoder, AbiDecoderBuilder, DecodeOptions, TrailingBytesPolicy};
pub use eosabi_codec as codec;
pub use eosabi_core::{DecodeError, Value};
pub use eosabi_schema as schema;
pub use error::RegistryError;
pub use registry::AbiRegistry;

/// Decode `payload` as `action_or_type_name` under the ABI JSON in `schema`.
///
/// A malformed schema fails with [`DecodeError::SchemaMalformed`] before any
/// payload byte is read. Trailing bytes are allowed.
pub fn decode_action(
    schema: &[u8],
    action_or_type_name: &str,
    payload: &[u8],
) -> Result<Value, DecodeError> {
    AbiDecoder::from_json(schema)?.decode(action_or_type_name, payload)
}
