//! Byte cursor and builtin scalar codecs for EOSIO ABI payloads.
//!
//! Key components:
//! - [`Cursor`]: forward-only reader over one payload
//! - [`BuiltinType`]: the closed set of builtin scalar names and their codecs
//! - [`name_to_string`], [`Symbol`], [`Asset`]: text rendering of domain scalars

mod asset;
mod builtin;
mod cursor;
mod error;
mod key;
mod name;
mod primitive;

pub use asset::{Asset, MAX_PRECISION, Symbol};
pub use builtin::{BuiltinType, Codec, decode_builtin};
pub use cursor::Cursor;
pub use error::CodecError;
pub use key::base58_check_encode;
pub use name::name_to_string;
