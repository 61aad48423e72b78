//! Extension records and their accessors.
//!
//! An [`Extension`] declares a contribution to a [`Slot`]: the slot itself, a
//! [`Factory`] producing the runtime value and, once attached, the canonical
//! dependency declaration the factory expects. Records are never modified in
//! place; the combinators in [`crate::modify`] return updated copies.

mod builder;
mod factory;

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::query::Deps;
use crate::slot::Slot;

pub use builder::ExtensionBuilder;
pub use factory::{Factory, Instance, Provided, Resolved};

/// A contribution of a factory to an extension slot.
#[derive(Clone)]
pub struct Extension {
    slot: Slot,
    factory: Factory,
    deps: Option<Deps>,
    data: IndexMap<String, Value>,
}

impl Extension {
    /// Create an extension from an already wrapped factory.
    #[must_use]
    pub fn new(slot: Slot, factory: Factory) -> Self {
        Self {
            slot,
            factory,
            deps: None,
            data: IndexMap::new(),
        }
    }

    /// Start building an extension for `slot`.
    #[must_use]
    pub fn builder(slot: Slot) -> ExtensionBuilder {
        ExtensionBuilder::new(slot)
    }

    #[must_use]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    #[must_use]
    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Canonical dependency declaration, if one was attached.
    #[must_use]
    pub fn deps(&self) -> Option<&Deps> {
        self.deps.as_ref()
    }

    /// Application defined field stored under `key`.
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// All application defined fields in insertion order.
    #[must_use]
    pub fn data_fields(&self) -> &IndexMap<String, Value> {
        &self.data
    }

    pub(crate) fn set_deps(&mut self, deps: Deps) {
        self.deps = Some(deps);
    }

    pub(crate) fn set_data(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_owned(), value);
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("slot", &self.slot)
            .field("deps", &self.deps)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Create an extension contributing `factory` to `slot`.
///
/// The result carries only the slot and the factory; dependencies are attached
/// separately with [`crate::using`].
pub fn ext<F, T>(slot: Slot, factory: F) -> Extension
where
    F: Fn(&Resolved) -> T + Send + Sync + 'static,
    T: std::any::Any + Send + Sync,
{
    Extension::new(slot, Factory::new(factory))
}

/// Dependency declaration of `ext`, if any was attached.
pub fn deps(ext: &Extension) -> Option<&Deps> {
    ext.deps()
}

/// Slot `ext` contributes to.
pub fn slot_of(ext: &Extension) -> &Slot {
    ext.slot()
}

/// Factory of `ext`.
pub fn factory_of(ext: &Extension) -> &Factory {
    ext.factory()
}

/// Application defined field `key` of `ext`.
pub fn data<'a>(ext: &'a Extension, key: &str) -> Option<&'a Value> {
    ext.data(key)
}
