use std::any::Any;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ExtensionError;
use crate::slot::Slot;

use super::{Extension, Factory, Resolved};

/// Fallible constructor for extensions assembled piecemeal.
#[derive(Debug)]
pub struct ExtensionBuilder {
    slot: Slot,
    factory: Option<Factory>,
    data: IndexMap<String, Value>,
}

impl ExtensionBuilder {
    pub(super) fn new(slot: Slot) -> Self {
        Self {
            slot,
            factory: None,
            data: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn factory<F, T>(self, factory: F) -> Self
    where
        F: Fn(&Resolved) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.with_factory(Factory::new(factory))
    }

    #[must_use]
    pub fn with_factory(mut self, factory: Factory) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Attach an application defined field.
    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Finish the extension. A factory is required.
    pub fn build(self) -> Result<Extension, ExtensionError> {
        let factory = self
            .factory
            .ok_or_else(|| ExtensionError::invalid_argument("the factory must be a function"))?;
        Ok(Extension {
            slot: self.slot,
            factory,
            deps: None,
            data: self.data,
        })
    }
}
