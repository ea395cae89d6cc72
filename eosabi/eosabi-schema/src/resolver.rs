//! Type resolution through action bindings and alias chains.
//!
//! # Lookup strategy
//!
//! 1. **Action binding**: an action name is replaced by its bound type.
//! 2. **Alias chain**: follow `types` entries until a name is not an alias.
//!
//! Compound suffixes are left in place: `my_alias[]` is not an alias unless
//! declared as one, and the dispatcher strips one suffix per level before
//! resolving the inner name again.

use crate::{abi::Abi, error::ResolveError};

/// Default bound on alias chain length and decode nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

impl Abi {
    /// Resolve `name` to its concrete type name.
    pub fn resolve_type<'a>(&'a self, name: &'a str) -> Result<&'a str, ResolveError> {
        self.resolve_type_with_limit(name, DEFAULT_MAX_DEPTH)
    }

    /// Resolve `name`, failing once more than `max_depth` aliases are followed.
    pub fn resolve_type_with_limit<'a>(
        &'a self,
        name: &'a str,
        max_depth: usize,
    ) -> Result<&'a str, ResolveError> {
        let mut current = self.action_type(name).unwrap_or(name);
        let mut chain = vec![current];

        while let Some(target) = self.alias_target(current) {
            if chain.contains(&target) {
                chain.push(target);
                return Err(ResolveError::Cyclic {
                    chain: chain.into_iter().map(str::to_string).collect(),
                });
            }
            if chain.len() > max_depth {
                return Err(ResolveError::TooDeep {
                    name: name.to_string(),
                    limit: max_depth,
                });
            }
            chain.push(target);
            current = target;
        }

        Ok(current)
    }
}
