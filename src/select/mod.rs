//! Selecting extensions from a pool.
//!
//! The canonical [`Query`] is the authoritative selector input. A
//! `(Slot, Filter)` pair is accepted as well and adapted into the same
//! [`Selection`]; the `one` flag of a query plays no part in selection.

use log::trace;

use crate::extension::Extension;
use crate::query::{Filter, Query};
use crate::slot::Slot;

/// Slot and filter a pool of extensions is matched against.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    slot: Slot,
    filter: Filter,
}

impl Selection {
    #[must_use]
    pub fn new(slot: Slot, filter: Filter) -> Self {
        Self { slot, filter }
    }

    #[must_use]
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn matches(&self, ext: &Extension) -> bool {
        ext.slot() == &self.slot && self.filter.matches(ext)
    }
}

impl From<Query> for Selection {
    fn from(query: Query) -> Self {
        Self::new(query.slot().clone(), query.filter().clone())
    }
}

impl From<&Query> for Selection {
    fn from(query: &Query) -> Self {
        Self::new(query.slot().clone(), query.filter().clone())
    }
}

impl From<(Slot, Filter)> for Selection {
    fn from((slot, filter): (Slot, Filter)) -> Self {
        Self::new(slot, filter)
    }
}

impl From<&(Slot, Filter)> for Selection {
    fn from((slot, filter): &(Slot, Filter)) -> Self {
        Self::new(slot.clone(), filter.clone())
    }
}

/// Every extension of `extensions` contributed to the selection's slot and
/// accepted by its filter, in pool order. Duplicates are kept.
pub fn select<'a>(query: impl Into<Selection>, extensions: &'a [Extension]) -> Vec<&'a Extension> {
    if extensions.is_empty() {
        return Vec::new();
    }
    let selection = query.into();
    let selected: Vec<_> = extensions
        .iter()
        .filter(|ext| selection.matches(ext))
        .collect();
    trace!(
        "selected {} of {} extensions for {}",
        selected.len(),
        extensions.len(),
        selection.slot()
    );
    selected
}

/// First extension [`select`] would return, if any.
pub fn select_first<'a>(
    query: impl Into<Selection>,
    extensions: &'a [Extension],
) -> Option<&'a Extension> {
    let selection = query.into();
    extensions.iter().find(|ext| selection.matches(ext))
}
