//! In-memory ABI document with name-indexed lookups.

use std::collections::HashMap;

use eosabi_core::DecodeError;
use serde::{Deserialize, Serialize};

/// `new_type_name -> type` alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeDef {
    pub new_type_name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StructDef {
    pub name: String,
    /// Parent struct whose fields precede this struct's own; empty for none.
    #[serde(default)]
    pub base: String,
    /// Wire order.
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    pub fn base_name(&self) -> Option<&str> {
        (!self.base.is_empty()).then_some(self.base.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActionDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub ricardian_contract: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableDef {
    pub name: String,
    #[serde(default)]
    pub index_type: String,
    #[serde(default)]
    pub key_names: Vec<String>,
    #[serde(default)]
    pub key_types: Vec<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClausePair {
    pub id: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorMessage {
    pub error_code: u64,
    pub error_msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbiExtension {
    pub tag: u16,
    /// Hex-encoded extension payload.
    pub value: String,
}

/// ABI document as it appears in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbiDocument {
    pub version: String,
    pub types: Vec<TypeDef>,
    pub structs: Vec<StructDef>,
    pub actions: Vec<ActionDef>,
    #[serde(default)]
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub ricardian_clauses: Vec<ClausePair>,
    #[serde(default)]
    pub error_messages: Vec<ErrorMessage>,
    #[serde(default)]
    pub abi_extensions: Vec<AbiExtension>,
}

/// A validated, read-only ABI with lookups by name.
///
/// When a name is declared more than once, the first declaration wins.
#[derive(Debug, Clone)]
pub struct Abi {
    doc: AbiDocument,
    aliases: HashMap<String, usize>,
    structs: HashMap<String, usize>,
    actions: HashMap<String, usize>,
    tables: HashMap<String, usize>,
}

impl Abi {
    /// Parse and validate an ABI from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        let doc: AbiDocument =
            serde_json::from_slice(data).map_err(|e| DecodeError::SchemaMalformed {
                detail: "failed to parse ABI JSON".to_string(),
                source: Some(Box::new(e)),
            })?;
        Self::from_document(doc)
    }

    pub fn from_json_str(data: &str) -> Result<Self, DecodeError> {
        Self::from_json(data.as_bytes())
    }

    /// Validate required names and build the lookup indices.
    pub fn from_document(doc: AbiDocument) -> Result<Self, DecodeError> {
        validate(&doc)?;

        let aliases = index_by(&doc.types, |t| &t.new_type_name);
        let structs = index_by(&doc.structs, |s| &s.name);
        let actions = index_by(&doc.actions, |a| &a.name);
        let tables = index_by(&doc.tables, |t| &t.name);

        tracing::debug!(
            version = %doc.version,
            types = doc.types.len(),
            structs = doc.structs.len(),
            actions = doc.actions.len(),
            "loaded ABI"
        );

        Ok(Self {
            doc,
            aliases,
            structs,
            actions,
            tables,
        })
    }

    pub fn document(&self) -> &AbiDocument {
        &self.doc
    }

    pub fn version(&self) -> &str {
        &self.doc.version
    }

    pub fn types(&self) -> &[TypeDef] {
        &self.doc.types
    }

    pub fn structs(&self) -> &[StructDef] {
        &self.doc.structs
    }

    pub fn actions(&self) -> &[ActionDef] {
        &self.doc.actions
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.doc.tables
    }

    pub fn ricardian_clauses(&self) -> &[ClausePair] {
        &self.doc.ricardian_clauses
    }

    pub fn error_messages(&self) -> &[ErrorMessage] {
        &self.doc.error_messages
    }

    pub fn abi_extensions(&self) -> &[AbiExtension] {
        &self.doc.abi_extensions
    }

    pub fn struct_def(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name).map(|&i| &self.doc.structs[i])
    }

    /// Target of the alias `name`, one step only.
    pub fn alias_target(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(name)
            .map(|&i| self.doc.types[i].ty.as_str())
    }

    /// Type bound to the action `name`.
    pub fn action_type(&self, name: &str) -> Option<&str> {
        self.actions
            .get(name)
            .map(|&i| self.doc.actions[i].ty.as_str())
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name).map(|&i| &self.doc.tables[i])
    }
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    let mut out = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.entry(key(item).clone()).or_insert(i);
    }
    out
}

fn validate(doc: &AbiDocument) -> Result<(), DecodeError> {
    for (i, t) in doc.types.iter().enumerate() {
        if t.new_type_name.is_empty() {
            return Err(DecodeError::schema_malformed(format!(
                "types[{i}] has an empty new_type_name"
            )));
        }
        if t.ty.is_empty() {
            return Err(DecodeError::schema_malformed(format!(
                "alias '{}' has an empty target type",
                t.new_type_name
            )));
        }
    }

    for (i, s) in doc.structs.iter().enumerate() {
        if s.name.is_empty() {
            return Err(DecodeError::schema_malformed(format!(
                "structs[{i}] has an empty name"
            )));
        }
        for (j, f) in s.fields.iter().enumerate() {
            if f.name.is_empty() || f.ty.is_empty() {
                return Err(DecodeError::schema_malformed(format!(
                    "struct '{}' field {j} has an empty name or type",
                    s.name
                )));
            }
        }
    }

    for (i, a) in doc.actions.iter().enumerate() {
        if a.name.is_empty() || a.ty.is_empty() {
            return Err(DecodeError::schema_malformed(format!(
                "actions[{i}] has an empty name or type"
            )));
        }
    }

    Ok(())
}
