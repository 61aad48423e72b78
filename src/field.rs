//! Field namespace used to tag extension and query records.
//!
//! Internal bookkeeping fields live in a closed enum, while application data
//! uses plain string keys. Keeping the two in separate variants of
//! [`FieldKey`] means no user supplied key can alias an internal field, even
//! if it is spelled exactly like one.

use std::fmt;

/// Distinguished fields carried by extensions and canonical queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The slot an extension contributes to, or a query asks for.
    SlotOf,
    /// The extension factory.
    Factory,
    /// The dependency declaration of an extension.
    Deps,
    /// The filter predicate of a canonical query.
    Filter,
    /// Whether a canonical query expects exactly one match.
    One,
}

impl Field {
    /// Namespaced name used in diagnostics and in manifest documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::SlotOf => "@@extkit/extOf",
            Field::Factory => "@@extkit/ext",
            Field::Deps => "@@extkit/deps",
            Field::Filter => "@@extkit/qFilter",
            Field::One => "@@extkit/one",
        }
    }

    #[must_use]
    pub const fn all() -> [Field; 5] {
        [
            Field::SlotOf,
            Field::Factory,
            Field::Deps,
            Field::Filter,
            Field::One,
        ]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key addressing a single field of an extension record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Internal(Field),
    Data(String),
}

impl FieldKey {
    #[must_use]
    pub fn data(name: impl Into<String>) -> Self {
        Self::Data(name.into())
    }

    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl From<Field> for FieldKey {
    fn from(field: Field) -> Self {
        Self::Internal(field)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(field) => field.fmt(f),
            Self::Data(name) => f.write_str(name),
        }
    }
}
