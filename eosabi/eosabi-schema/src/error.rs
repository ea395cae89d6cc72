//! Alias resolution errors.

use eosabi_core::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The chain of visited names, ending with the repeated one.
    #[error("cyclic alias: {}", chain.join(" -> "))]
    Cyclic { chain: Vec<String> },

    #[error("alias chain for '{name}' exceeds {limit} steps")]
    TooDeep { name: String, limit: usize },
}

impl ResolveError {
    /// Attach the type name and cursor offset at which resolution was attempted.
    pub fn into_decode_error(self, type_name: &str, offset: usize) -> DecodeError {
        match self {
            ResolveError::Cyclic { chain } => DecodeError::CyclicAlias {
                type_name: type_name.to_string(),
                chain,
                offset,
            },
            ResolveError::TooDeep { limit, .. } => DecodeError::RecursionLimitExceeded {
                type_name: type_name.to_string(),
                offset,
                limit,
            },
        }
    }
}
