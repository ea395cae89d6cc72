//! EOSIO ABI schema model and type resolution.
//!
//! Key components:
//! - [`abi`]: serde model of the ABI document and the validated [`Abi`]
//! - [`type_name`]: the `T` / `T[]` / `T?` grammar
//! - `resolver`: action and alias resolution with cycle detection

pub mod abi;
mod error;
mod resolver;
pub mod type_name;

pub use abi::{
    Abi, AbiDocument, AbiExtension, ActionDef, ClausePair, ErrorMessage, FieldDef, StructDef,
    TableDef, TypeDef,
};
pub use error::ResolveError;
pub use resolver::DEFAULT_MAX_DEPTH;
pub use type_name::{TypeName, fundamental_type, is_array, is_optional};
