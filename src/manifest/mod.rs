//! Dependency declarations written as data.
//!
//! A manifest maps extension names to dependency declarations whose queries
//! reference slots and filters by name:
//!
//! ```toml
//! [extensions.search]
//! files = "files"                  # the single extension of slot `files`
//! icons = ["icons"]                # every extension of slot `icons`
//! previews = ["preview", "images"] # those accepted by filter `images`
//! ```
//!
//! Names are resolved through a [`Lookup`], which is also where malformed
//! queries are reported.

mod loader;
mod lookup;

use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ExtensionError;
use crate::extension::Extension;
use crate::modify::using;
use crate::query::Deps;

pub use loader::load;
pub use lookup::Lookup;

/// Untyped dependency declarations keyed by extension name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub extensions: IndexMap<String, IndexMap<String, Value>>,
}

impl Manifest {
    /// Parse a manifest from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|err| anyhow!("failed to parse manifest: {err}"))
    }

    /// Names of the extensions that carry a declaration, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// Canonical deps declared for `name`, if the manifest mentions it.
    pub fn deps(&self, name: &str, lookup: &Lookup) -> Result<Option<Deps>, ExtensionError> {
        self.extensions
            .get(name)
            .map(|decl| lookup.deps(decl))
            .transpose()
    }

    /// Attach the declaration for `name` to `ext`.
    ///
    /// Extensions the manifest does not mention are returned unchanged.
    pub fn attach(
        &self,
        name: &str,
        lookup: &Lookup,
        ext: &Extension,
    ) -> Result<Extension, ExtensionError> {
        match self.deps(name, lookup)? {
            Some(deps) => Ok(using(deps, ext)),
            None => {
                warn!("manifest has no declaration for extension '{name}'");
                Ok(ext.clone())
            }
        }
    }
}
