//! Codec-level errors, lifted into [`DecodeError`] once the type name is known.

use eosabi_core::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unexpected end of stream at offset {offset}: need {needed} byte(s), {remaining} remaining")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid encoding at offset {offset}: {detail}")]
    InvalidEncoding { offset: usize, detail: String },
}

impl CodecError {
    pub fn invalid(offset: usize, detail: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            offset,
            detail: detail.into(),
        }
    }

    /// Attach the name of the type being decoded.
    pub fn into_decode_error(self, type_name: &str) -> DecodeError {
        match self {
            CodecError::UnexpectedEnd {
                offset,
                needed,
                remaining,
            } => DecodeError::UnexpectedEndOfStream {
                type_name: type_name.to_string(),
                offset,
                needed,
                remaining,
            },
            CodecError::InvalidEncoding { offset, detail } => DecodeError::InvalidEncoding {
                type_name: type_name.to_string(),
                offset,
                detail,
            },
        }
    }
}
