//! Dependency queries and their normalization.
//!
//! End users write queries in a terse form: a bare slot asks for the single
//! extension contributed to it, a one element tuple asks for all of them and a
//! two element tuple additionally narrows the collection with a [`Filter`].
//! [`parse_query`] turns any of these into the canonical [`Query`] consumed by
//! the selector. Normalization is idempotent.

mod filter;

use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::extension::Extension;
use crate::field::Field;
use crate::slot::Slot;

pub use filter::Filter;

/// Canonical dependency declaration: dependency name to canonical query.
pub type Deps = IndexMap<String, Query>;

/// Dependency declaration as written by users, before normalization.
pub type DepsDecl = IndexMap<String, TerseQuery>;

/// Canonical query: which slot, whether exactly one match is expected, and
/// the filter applied to candidates.
#[derive(Clone, PartialEq)]
pub struct Query {
    slot: Slot,
    one: bool,
    filter: Filter,
}

impl Query {
    #[must_use]
    pub fn new(slot: Slot, one: bool, filter: Filter) -> Self {
        Self { slot, one, filter }
    }

    /// Query expecting exactly one extension contributed to `slot`.
    #[must_use]
    pub fn one(slot: Slot) -> Self {
        Self::new(slot, true, Filter::always())
    }

    /// Query collecting every extension contributed to `slot`.
    #[must_use]
    pub fn all(slot: Slot) -> Self {
        Self::new(slot, false, Filter::always())
    }

    /// Query collecting the extensions of `slot` accepted by `filter`.
    #[must_use]
    pub fn filtered(slot: Slot, filter: Filter) -> Self {
        Self::new(slot, false, filter)
    }

    #[must_use]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    #[must_use]
    pub fn expects_one(&self) -> bool {
        self.one
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns `true` when `ext` contributes to this query's slot and passes
    /// its filter.
    pub fn matches(&self, ext: &Extension) -> bool {
        ext.slot() == &self.slot && self.filter.matches(ext)
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field(Field::SlotOf.name(), &self.slot)
            .field(Field::One.name(), &self.one)
            .field(Field::Filter.name(), &self.filter)
            .finish()
    }
}

/// A query in any of the forms accepted by [`parse_query`].
#[derive(Clone, Debug, PartialEq)]
pub enum TerseQuery {
    /// `slot`: the only extension contributed to the slot.
    Bare(Slot),
    /// `[slot]`: every extension contributed to the slot.
    All(Slot),
    /// `[slot, filter]`: every extension of the slot accepted by the filter.
    Filtered(Slot, Filter),
    /// Already canonical; passed through untouched.
    Canonical(Query),
}

impl TerseQuery {
    /// Shorthand for a filtered collection query built from a closure.
    pub fn filtered<F>(slot: Slot, predicate: F) -> Self
    where
        F: Fn(&Extension) -> bool + Send + Sync + 'static,
    {
        Self::Filtered(slot, Filter::new(predicate))
    }
}

impl From<Slot> for TerseQuery {
    fn from(slot: Slot) -> Self {
        Self::Bare(slot)
    }
}

impl From<&Slot> for TerseQuery {
    fn from(slot: &Slot) -> Self {
        Self::Bare(slot.clone())
    }
}

impl From<[Slot; 1]> for TerseQuery {
    fn from([slot]: [Slot; 1]) -> Self {
        Self::All(slot)
    }
}

impl From<(Slot,)> for TerseQuery {
    fn from((slot,): (Slot,)) -> Self {
        Self::All(slot)
    }
}

impl From<(Slot, Filter)> for TerseQuery {
    fn from((slot, filter): (Slot, Filter)) -> Self {
        Self::Filtered(slot, filter)
    }
}

impl From<Query> for TerseQuery {
    fn from(query: Query) -> Self {
        Self::Canonical(query)
    }
}

impl From<&Query> for TerseQuery {
    fn from(query: &Query) -> Self {
        Self::Canonical(query.clone())
    }
}

impl From<&TerseQuery> for TerseQuery {
    fn from(query: &TerseQuery) -> Self {
        query.clone()
    }
}

/// Normalize a possibly terse query into its canonical form.
pub fn parse_query(query: impl Into<TerseQuery>) -> Query {
    let query = query.into();
    trace!("normalizing query {query:?}");
    match query {
        TerseQuery::Bare(slot) => Query::one(slot),
        TerseQuery::All(slot) => Query::all(slot),
        TerseQuery::Filtered(slot, filter) => Query::filtered(slot, filter),
        TerseQuery::Canonical(query) => query,
    }
}

/// Normalize every query of a dependency declaration, preserving keys and
/// their order.
pub fn parse_deps<I, K, Q>(decl: I) -> Deps
where
    I: IntoIterator<Item = (K, Q)>,
    K: Into<String>,
    Q: Into<TerseQuery>,
{
    decl.into_iter()
        .map(|(key, query)| (key.into(), parse_query(query)))
        .collect()
}

/// Build a [`DepsDecl`] from `name => query` pairs of mixed terse forms.
///
/// ```
/// use extkit::{Filter, Slot, deps_decl};
///
/// let files = Slot::new("files");
/// let icons = Slot::new("icons");
/// let decl = deps_decl! {
///     "files" => files,
///     "icons" => (icons, Filter::always()),
/// };
/// assert_eq!(decl.len(), 2);
/// ```
#[macro_export]
macro_rules! deps_decl {
    ($($key:expr => $query:expr),* $(,)?) => {{
        let mut decl = $crate::DepsDecl::new();
        $(
            decl.insert(::std::string::String::from($key), $crate::TerseQuery::from($query));
        )*
        decl
    }};
}

#[cfg(test)]
mod tests;
