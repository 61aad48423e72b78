//! Non-destructive update combinators over extensions.
//!
//! [`modify`] and [`modify_or`] rewrite one field of one or many extensions
//! and return fresh records, leaving their inputs untouched. [`using`] builds
//! on them to attach dependency declarations.

mod target;

use log::debug;
use serde_json::Value;

use crate::extension::Extension;
use crate::field::{Field, FieldKey};
use crate::query::{Deps, TerseQuery, parse_deps};

pub use target::ExtensionTarget;

/// A field of an extension that may be rewritten by the combinators.
///
/// The slot and the factory are fixed at construction and deliberately have
/// no implementation.
pub trait ExtensionField {
    type Value: Clone;

    /// Key identifying this field.
    fn key(&self) -> FieldKey;

    /// Current value, or `None` when the field was never set.
    fn get<'a>(&self, ext: &'a Extension) -> Option<&'a Self::Value>;

    /// Store `value` into `ext`.
    fn set(&self, ext: &mut Extension, value: Self::Value);
}

/// The dependency declaration of an extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepsField;

impl ExtensionField for DepsField {
    type Value = Deps;

    fn key(&self) -> FieldKey {
        FieldKey::Internal(Field::Deps)
    }

    fn get<'a>(&self, ext: &'a Extension) -> Option<&'a Deps> {
        ext.deps()
    }

    fn set(&self, ext: &mut Extension, value: Deps) {
        ext.set_deps(value);
    }
}

/// An application defined field, addressed by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataField(pub String);

impl DataField {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl ExtensionField for DataField {
    type Value = Value;

    fn key(&self) -> FieldKey {
        FieldKey::Data(self.0.clone())
    }

    fn get<'a>(&self, ext: &'a Extension) -> Option<&'a Value> {
        // A JSON null counts as absent, like a missing key.
        ext.data(&self.0).filter(|value| !value.is_null())
    }

    fn set(&self, ext: &mut Extension, value: Value) {
        ext.set_data(&self.0, value);
    }
}

/// Apply `update` to `field` of every extension in `target`.
///
/// `update` receives the current value, or `None` when the field is absent.
pub fn modify<F, U, T>(field: &F, update: U, target: T) -> T::Output
where
    F: ExtensionField,
    U: Fn(Option<F::Value>) -> F::Value,
    T: ExtensionTarget,
{
    target.map_each(|ext| {
        let current = field.get(ext).cloned();
        let mut updated = ext.clone();
        field.set(&mut updated, update(current));
        updated
    })
}

/// Apply `update` to `field` of every extension in `target`, substituting
/// `default` for extensions that lack the field.
pub fn modify_or<F, U, T>(field: &F, default: F::Value, update: U, target: T) -> T::Output
where
    F: ExtensionField,
    U: Fn(F::Value) -> F::Value,
    T: ExtensionTarget,
{
    modify(
        field,
        |current| update(current.unwrap_or_else(|| default.clone())),
        target,
    )
}

/// Right-biased shallow merge: keys of `right` overwrite those of `left`,
/// keys only in `left` keep their position.
pub fn merge_deps(left: &Deps, right: Deps) -> Deps {
    let mut merged = left.clone();
    merged.extend(right);
    merged
}

/// Attach a dependency declaration to every extension in `target`.
///
/// The declaration is normalized first and merged over any deps the
/// extensions already carry.
pub fn using<I, K, Q, T>(decl: I, target: T) -> T::Output
where
    I: IntoIterator<Item = (K, Q)>,
    K: Into<String>,
    Q: Into<TerseQuery>,
    T: ExtensionTarget,
{
    let parsed = parse_deps(decl);
    debug!(
        "attaching {} to {}: {:?}",
        DepsField.key(),
        target.describe(),
        parsed.keys().collect::<Vec<_>>()
    );
    modify_or(
        &DepsField,
        Deps::new(),
        |existing| merge_deps(&existing, parsed.clone()),
        target,
    )
}

#[cfg(test)]
mod tests;
