//! Compound type-name grammar: `T`, `T[]`, `T?`.

/// One layer of a type name, classified by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName<'a> {
    /// `T[]`: varuint32 count followed by that many `T`.
    Array(&'a str),
    /// `T?`: presence byte, then `T` if nonzero.
    Optional(&'a str),
    /// Builtin, alias or struct name.
    Plain(&'a str),
}

impl<'a> TypeName<'a> {
    /// Strip exactly one suffix layer.
    pub fn parse(name: &'a str) -> Self {
        if let Some(inner) = name.strip_suffix("[]") {
            TypeName::Array(inner)
        } else if let Some(inner) = name.strip_suffix('?') {
            TypeName::Optional(inner)
        } else {
            TypeName::Plain(name)
        }
    }

    pub fn inner(self) -> &'a str {
        match self {
            TypeName::Array(s) | TypeName::Optional(s) | TypeName::Plain(s) => s,
        }
    }
}

/// `name` with one `[]` or `?` suffix removed.
pub fn fundamental_type(name: &str) -> &str {
    TypeName::parse(name).inner()
}

pub fn is_array(name: &str) -> bool {
    matches!(TypeName::parse(name), TypeName::Array(_))
}

pub fn is_optional(name: &str) -> bool {
    matches!(TypeName::parse(name), TypeName::Optional(_))
}
