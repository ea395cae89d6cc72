//! Schema-agnostic core types for `eosabi`.
//!
//! This crate provides the decoded value tree ([`Value`]) and the error
//! taxonomy ([`DecodeError`]) shared by the codec, schema and decoder crates.

mod error;
mod value;

pub use error::{DecodeError, ValueTypeError};
pub use value::Value;
