//! Contract account -> decoder registry.

use std::{collections::HashMap, sync::Arc};

use eosabi_core::Value;

use crate::{decoder::AbiDecoder, error::RegistryError};

/// Holds one [`AbiDecoder`] per contract account so ABIs are loaded once.
#[derive(Debug, Clone, Default)]
pub struct AbiRegistry {
    decoders: HashMap<String, Arc<AbiDecoder>>,
}

impl AbiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for `account`, returning the one it replaces.
    pub fn register(
        &mut self,
        account: impl Into<String>,
        decoder: AbiDecoder,
    ) -> Option<Arc<AbiDecoder>> {
        self.decoders.insert(account.into(), Arc::new(decoder))
    }

    /// Parse an ABI JSON document and register it for `account`.
    pub fn register_json(
        &mut self,
        account: impl Into<String>,
        schema: &[u8],
    ) -> Result<(), RegistryError> {
        let account = account.into();
        let decoder =
            AbiDecoder::from_json(schema).map_err(|source| RegistryError::SchemaLoadFailed {
                account: account.clone(),
                source,
            })?;
        self.decoders.insert(account, Arc::new(decoder));
        Ok(())
    }

    pub fn get(&self, account: &str) -> Option<&Arc<AbiDecoder>> {
        self.decoders.get(account)
    }

    pub fn contains(&self, account: &str) -> bool {
        self.decoders.contains_key(account)
    }

    /// Decode an action payload with the ABI registered for `account`.
    pub fn decode(&self, account: &str, action: &str, data: &[u8]) -> Result<Value, RegistryError> {
        let decoder = self
            .get(account)
            .ok_or_else(|| RegistryError::UnknownContract {
                account: account.to_string(),
            })?;
        decoder
            .decode(action, data)
            .map_err(|source| RegistryError::DecodeFailed {
                account: account.to_string(),
                source,
            })
    }
}
