//! Error types for the decoder layer.

/// Error returned by every decode entry point.
///
/// All variants are fatal to the decode call that produced them. Variants
/// raised while reading the payload carry the type name being decoded and
/// the cursor offset at which the failure was detected.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The schema document is structurally invalid or could not be parsed.
    #[error("malformed schema: {detail}")]
    SchemaMalformed {
        detail: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A type name resolved to neither a builtin nor a known struct.
    #[error("unknown type '{type_name}' at offset {offset}")]
    UnknownType { type_name: String, offset: usize },

    /// A struct definition required for decoding (e.g. a base) is absent.
    #[error("unknown struct '{type_name}' at offset {offset}")]
    UnknownStruct { type_name: String, offset: usize },

    /// Alias resolution revisited a name already in the chain.
    #[error("cyclic alias while resolving '{type_name}' at offset {offset}: {}", chain.join(" -> "))]
    CyclicAlias {
        type_name: String,
        chain: Vec<String>,
        offset: usize,
    },

    /// A struct's flattened field list (base chain plus own fields) names the
    /// same field twice. Raised for a base/derived collision and for a struct
    /// that repeats one of its own field names.
    #[error("duplicate field '{field}' in struct '{type_name}' at offset {offset}")]
    DuplicateField {
        type_name: String,
        field: String,
        offset: usize,
    },

    /// A codec needed more bytes than remain in the payload.
    #[error(
        "unexpected end of stream decoding '{type_name}' at offset {offset}: need {needed} byte(s), {remaining} remaining"
    )]
    UnexpectedEndOfStream {
        type_name: String,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Bytes were read but do not form a valid value of the type.
    #[error("invalid encoding for '{type_name}' at offset {offset}: {detail}")]
    InvalidEncoding {
        type_name: String,
        offset: usize,
        detail: String,
    },

    /// Nesting of aliases, structs, arrays or optionals exceeded the configured bound.
    #[error("recursion limit {limit} exceeded decoding '{type_name}' at offset {offset}")]
    RecursionLimitExceeded {
        type_name: String,
        offset: usize,
        limit: usize,
    },

    /// The payload was decoded but bytes remain and the caller asked to reject them.
    #[error("{remaining} trailing byte(s) after decoding '{type_name}' at offset {offset}")]
    TrailingBytes {
        type_name: String,
        offset: usize,
        remaining: usize,
    },
}

impl DecodeError {
    pub fn schema_malformed(detail: impl Into<String>) -> Self {
        Self::SchemaMalformed {
            detail: detail.into(),
            source: None,
        }
    }

    /// Type name the error is attached to, if any.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DecodeError::SchemaMalformed { .. } => None,
            DecodeError::UnknownType { type_name, .. }
            | DecodeError::UnknownStruct { type_name, .. }
            | DecodeError::CyclicAlias { type_name, .. }
            | DecodeError::DuplicateField { type_name, .. }
            | DecodeError::UnexpectedEndOfStream { type_name, .. }
            | DecodeError::InvalidEncoding { type_name, .. }
            | DecodeError::RecursionLimitExceeded { type_name, .. }
            | DecodeError::TrailingBytes { type_name, .. } => Some(type_name),
        }
    }

    /// Cursor offset at which the error was detected, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::SchemaMalformed { .. } => None,
            DecodeError::UnknownType { offset, .. }
            | DecodeError::UnknownStruct { offset, .. }
            | DecodeError::CyclicAlias { offset, .. }
            | DecodeError::DuplicateField { offset, .. }
            | DecodeError::UnexpectedEndOfStream { offset, .. }
            | DecodeError::InvalidEncoding { offset, .. }
            | DecodeError::RecursionLimitExceeded { offset, .. }
            | DecodeError::TrailingBytes { offset, .. } => Some(*offset),
        }
    }
}

/// Error returned by the `Value::try_*` accessors when the variant does not match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
