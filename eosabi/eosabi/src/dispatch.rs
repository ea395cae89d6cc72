//! Recursive, schema-driven decoding of a single payload.

use eosabi_codec::{Cursor, decode_builtin};
use eosabi_core::{DecodeError, Value};
use eosabi_schema::{Abi, StructDef, TypeName};

/// Decodes one payload against one ABI. Holds the only cursor for the call.
pub(crate) struct Dispatcher<'a> {
    abi: &'a Abi,
    cursor: Cursor,
    max_depth: usize,
}

impl<'a> Dispatcher<'a> {
    pub(crate) fn new(abi: &'a Abi, data: &[u8], max_depth: usize) -> Self {
        Self {
            abi,
            cursor: Cursor::from_slice(data),
            max_depth,
        }
    }

    pub(crate) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Resolve `type_name`, classify it and decode one value.
    pub(crate) fn decode(&mut self, type_name: &str, depth: usize) -> Result<Value, DecodeError> {
        self.check_depth(type_name, depth)?;

        let abi = self.abi;
        let offset = self.cursor.offset();
        let concrete = abi
            .resolve_type_with_limit(type_name, self.max_depth)
            .map_err(|e| e.into_decode_error(type_name, offset))?;

        match TypeName::parse(concrete) {
            TypeName::Array(inner) => self.decode_array(concrete, inner, depth),
            TypeName::Optional(inner) => self.decode_optional(concrete, inner, depth),
            TypeName::Plain(name) => {
                if let Some(result) = decode_builtin(name, &mut self.cursor) {
                    return result.map_err(|e| e.into_decode_error(name));
                }
                match abi.struct_def(name) {
                    Some(def) => self.decode_struct(def, depth),
                    None => Err(DecodeError::UnknownType {
                        type_name: name.to_string(),
                        offset,
                    }),
                }
            }
        }
    }

    fn decode_array(
        &mut self,
        type_name: &str,
        inner: &str,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        let count_offset = self.cursor.offset();
        let count = self
            .cursor
            .read_varuint32()
            .map_err(|e| e.into_decode_error(type_name))? as usize;
        tracing::trace!(type_name, count, "decoding array");

        let remaining = self.cursor.remaining();
        // Cap preallocation at what the payload could hold.
        let mut items = Vec::with_capacity(count.min(remaining));
        for i in 0..count {
            let start = self.cursor.offset();
            items.push(self.decode(inner, depth + 1)?);
            // Zero-width elements never exhaust the cursor; bound their count by the payload.
            if i == 0 && self.cursor.offset() == start && count > remaining {
                return Err(DecodeError::InvalidEncoding {
                    type_name: type_name.to_string(),
                    offset: count_offset,
                    detail: format!(
                        "array count {count} of zero-width elements exceeds {remaining} remaining byte(s)"
                    ),
                });
            }
        }
        Ok(Value::List(items))
    }

    fn decode_optional(
        &mut self,
        type_name: &str,
        inner: &str,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        let present = self
            .cursor
            .read_u8()
            .map_err(|e| e.into_decode_error(type_name))?;
        if present == 0 {
            return Ok(Value::Null);
        }
        self.decode(inner, depth + 1)
    }

    fn decode_struct(&mut self, def: &'a StructDef, depth: usize) -> Result<Value, DecodeError> {
        let mut fields = Vec::with_capacity(def.fields.len());
        self.decode_struct_fields(def, &mut fields, depth)?;
        Ok(Value::Struct(fields))
    }

    /// Append `def`'s fields to `out`, base-struct fields first.
    fn decode_struct_fields(
        &mut self,
        def: &'a StructDef,
        out: &mut Vec<(String, Value)>,
        depth: usize,
    ) -> Result<(), DecodeError> {
        self.check_depth(&def.name, depth)?;
        tracing::trace!(name = %def.name, depth, "decoding struct");

        if let Some(base) = def.base_name() {
            let abi = self.abi;
            let offset = self.cursor.offset();
            let base_name = abi
                .resolve_type_with_limit(base, self.max_depth)
                .map_err(|e| e.into_decode_error(base, offset))?;
            let base_def = abi
                .struct_def(base_name)
                .ok_or_else(|| DecodeError::UnknownStruct {
                    type_name: base_name.to_string(),
                    offset,
                })?;
            self.decode_struct_fields(base_def, out, depth + 1)?;
        }

        for field in &def.fields {
            if out.iter().any(|(name, _)| *name == field.name) {
                return Err(DecodeError::DuplicateField {
                    type_name: def.name.clone(),
                    field: field.name.clone(),
                    offset: self.cursor.offset(),
                });
            }
            let value = self.decode(&field.ty, depth + 1)?;
            out.push((field.name.clone(), value));
        }
        Ok(())
    }

    fn check_depth(&self, type_name: &str, depth: usize) -> Result<(), DecodeError> {
        if depth > self.max_depth {
            return Err(DecodeError::RecursionLimitExceeded {
                type_name: type_name.to_string(),
                offset: self.cursor.offset(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}
