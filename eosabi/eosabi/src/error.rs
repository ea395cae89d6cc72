//! Error types for the contract registry.

use eosabi_core::DecodeError;

/// Errors produced by [`AbiRegistry`](crate::AbiRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No ABI was registered for the contract account.
    #[error("no ABI registered for contract '{account}'")]
    UnknownContract { account: String },

    /// The ABI for a contract could not be loaded.
    #[error("failed to load ABI for contract '{account}': {source}")]
    SchemaLoadFailed {
        account: String,
        #[source]
        source: DecodeError,
    },

    /// Decoder failed to decode an action payload.
    #[error("decode failed for contract '{account}': {source}")]
    DecodeFailed {
        account: String,
        #[source]
        source: DecodeError,
    },
}
