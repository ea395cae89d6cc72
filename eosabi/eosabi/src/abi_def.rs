//! Binary `abi_def` decoding, as carried in a `setabi` payload.

use std::sync::LazyLock;

use eosabi_core::{DecodeError, Value};
use eosabi_schema::{Abi, AbiDocument};

use crate::decoder::AbiDecoder;

const ABI_DEF_SCHEMA: &str = r#"{
    "version": "eosio::abi/1.0",
    "types": [],
    "structs": [
        { "name": "type_def", "fields": [
            { "name": "new_type_name", "type": "string" },
            { "name": "type", "type": "string" } ] },
        { "name": "field_def", "fields": [
            { "name": "name", "type": "string" },
            { "name": "type", "type": "string" } ] },
        { "name": "struct_def", "fields": [
            { "name": "name", "type": "string" },
            { "name": "base", "type": "string" },
            { "name": "fields", "type": "field_def[]" } ] },
        { "name": "action_def", "fields": [
            { "name": "name", "type": "name" },
            { "name": "type", "type": "string" },
            { "name": "ricardian_contract", "type": "string" } ] },
        { "name": "table_def", "fields": [
            { "name": "name", "type": "name" },
            { "name": "index_type", "type": "string" },
            { "name": "key_names", "type": "string[]" },
            { "name": "key_types", "type": "string[]" },
            { "name": "type", "type": "string" } ] },
        { "name": "clause_pair", "fields": [
            { "name": "id", "type": "string" },
            { "name": "body", "type": "string" } ] },
        { "name": "error_message", "fields": [
            { "name": "error_code", "type": "uint64" },
            { "name": "error_msg", "type": "string" } ] },
        { "name": "extensions_entry", "fields": [
            { "name": "tag", "type": "uint16" },
            { "name": "value", "type": "bytes" } ] },
        { "name": "abi_def", "fields": [
            { "name": "version", "type": "string" },
            { "name": "types", "type": "type_def[]" },
            { "name": "structs", "type": "struct_def[]" },
            { "name": "actions", "type": "action_def[]" },
            { "name": "tables", "type": "table_def[]" },
            { "name": "ricardian_clauses", "type": "clause_pair[]" },
            { "name": "error_messages", "type": "error_message[]" },
            { "name": "abi_extensions", "type": "extensions_entry[]" } ] }
    ],
    "actions": []
}"#;

static ABI_DEF_DECODER: LazyLock<AbiDecoder> = LazyLock::new(|| {
    let abi = Abi::from_json_str(ABI_DEF_SCHEMA).expect("built-in abi_def schema is valid");
    AbiDecoder::new(abi)
});

/// Decode a serialized `abi_def` into a value tree.
pub fn decode_abi_def(data: &[u8]) -> Result<Value, DecodeError> {
    ABI_DEF_DECODER.decode("abi_def", data)
}

/// Decode a serialized `abi_def` and load it as an [`Abi`].
pub fn abi_from_binary(data: &[u8]) -> Result<Abi, DecodeError> {
    let value = decode_abi_def(data)?;
    let doc: AbiDocument =
        serde_json::from_value(value.to_json()).map_err(|e| DecodeError::SchemaMalformed {
            detail: "decoded abi_def does not match the ABI document model".to_string(),
            source: Some(Box::new(e)),
        })?;
    Abi::from_document(doc)
}
