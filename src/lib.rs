//! Declarative extension slots.
//!
//! Extensions are contributions to opaque [`Slot`]s, each carrying a
//! [`Factory`] and an optional dependency declaration. Declarations are
//! written with terse queries and normalized into canonical [`Query`] values,
//! which the selector uses to pick matching extensions out of a pool. All
//! operations are pure: updating an extension yields a new record.
//!
//! ```
//! use extkit::{Filter, Query, Slot, deps_decl, ext, select, using};
//!
//! let tabs = Slot::new("tabs");
//! let icons = Slot::new("icons");
//!
//! let search = using(
//!     deps_decl! { "icons" => [icons.clone()] },
//!     &ext(tabs.clone(), |_| "search"),
//! );
//! let query = &search.deps().unwrap()["icons"];
//! assert_eq!(query, &Query::all(icons));
//!
//! let pool = vec![search];
//! assert_eq!(select((tabs, Filter::always()), &pool).len(), 1);
//! ```

pub mod error;
pub mod extension;
pub mod field;
pub mod manifest;
pub mod modify;
pub mod package;
pub mod query;
pub mod select;
pub mod slot;

pub use error::ExtensionError;
pub use extension::{
    Extension, ExtensionBuilder, Factory, Instance, Provided, Resolved, data, deps, ext,
    factory_of, slot_of,
};
pub use field::{Field, FieldKey};
pub use manifest::{Lookup, Manifest};
pub use modify::{
    DataField, DepsField, ExtensionField, ExtensionTarget, merge_deps, modify, modify_or, using,
};
pub use package::{ExtensionPackage, collect_packages};
pub use query::{Deps, DepsDecl, Filter, Query, TerseQuery, parse_deps, parse_query};
pub use select::{Selection, select, select_first};
pub use slot::{Slot, SlotDescriptor};
