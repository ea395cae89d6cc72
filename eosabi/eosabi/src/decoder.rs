//! Schema-bound decoder, reusable across calls and threads.

use std::sync::Arc;

use eosabi_core::{DecodeError, Value};
use eosabi_schema::{Abi, DEFAULT_MAX_DEPTH};
use rayon::prelude::*;

use crate::dispatch::Dispatcher;

/// What to do with bytes left over after the top-level value is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytesPolicy {
    /// Ignore them (logged at debug level).
    #[default]
    Allow,
    /// Fail with [`DecodeError::TrailingBytes`].
    Reject,
}

/// Tunables applied to every decode made by an [`AbiDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of structs, base structs, arrays and optionals, and
    /// maximum alias chain length.
    pub max_depth: usize,
    pub trailing_bytes: TrailingBytesPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trailing_bytes: TrailingBytesPolicy::default(),
        }
    }
}

/// Decodes payloads against one loaded [`Abi`].
///
/// The ABI is shared read-only; each decode call owns its own cursor, so a
/// single decoder can serve any number of threads.
#[derive(Debug, Clone)]
pub struct AbiDecoder {
    abi: Arc<Abi>,
    options: DecodeOptions,
}

/// Builder for configuring [`AbiDecoder`].
pub struct AbiDecoderBuilder {
    abi: Arc<Abi>,
    options: DecodeOptions,
}

impl AbiDecoder {
    pub fn new(abi: Abi) -> Self {
        Self::from_shared(Arc::new(abi))
    }

    pub fn from_shared(abi: Arc<Abi>) -> Self {
        Self {
            abi,
            options: DecodeOptions::default(),
        }
    }

    /// Create a builder for [`AbiDecoder`].
    pub fn builder(abi: Abi) -> AbiDecoderBuilder {
        AbiDecoderBuilder {
            abi: Arc::new(abi),
            options: DecodeOptions::default(),
        }
    }

    /// Parse an ABI JSON document and bind a decoder to it.
    pub fn from_json(schema: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self::new(Abi::from_json(schema)?))
    }

    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode `data` as `type_name` (an action, alias, struct, builtin or compound name).
    pub fn decode(&self, type_name: &str, data: &[u8]) -> Result<Value, DecodeError> {
        let (value, consumed) = self.decode_prefix(type_name, data)?;
        let remaining = data.len() - consumed;
        if remaining > 0 {
            match self.options.trailing_bytes {
                TrailingBytesPolicy::Allow => {
                    tracing::debug!(type_name, remaining, "trailing bytes left unconsumed");
                }
                TrailingBytesPolicy::Reject => {
                    return Err(DecodeError::TrailingBytes {
                        type_name: type_name.to_string(),
                        offset: consumed,
                        remaining,
                    });
                }
            }
        }
        Ok(value)
    }

    /// Decode one value from the front of `data` and report how many bytes it used.
    pub fn decode_prefix(&self, type_name: &str, data: &[u8]) -> Result<(Value, usize), DecodeError> {
        tracing::debug!(type_name, len = data.len(), "decoding payload");
        let mut dispatcher = Dispatcher::new(&self.abi, data, self.options.max_depth);
        let value = dispatcher.decode(type_name, 0)?;
        Ok((value, dispatcher.offset()))
    }

    /// Decode independent `(type_name, payload)` pairs in parallel.
    ///
    /// Results are returned in input order; one failure does not affect the others.
    pub fn decode_batch(&self, items: &[(&str, &[u8])]) -> Vec<Result<Value, DecodeError>> {
        items
            .par_iter()
            .map(|(type_name, data)| self.decode(type_name, data))
            .collect()
    }
}

impl AbiDecoderBuilder {
    /// Set the nesting and alias-chain bound (default: 64).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Set the trailing-bytes policy (default: [`TrailingBytesPolicy::Allow`]).
    pub fn with_trailing_bytes(mut self, policy: TrailingBytesPolicy) -> Self {
        self.options.trailing_bytes = policy;
        self
    }

    /// Build the decoder.
    pub fn build(self) -> AbiDecoder {
        AbiDecoder {
            abi: self.abi,
            options: self.options,
        }
    }
}
