use indexmap::IndexMap;
use log::trace;
use serde_json::Value;

use crate::error::ExtensionError;
use crate::field::Field;
use crate::query::{Deps, Filter, Query, TerseQuery, parse_query};
use crate::select::Selection;
use crate::slot::Slot;

/// Name tables used to turn untyped manifest values into typed queries.
#[derive(Clone, Debug, Default)]
pub struct Lookup {
    slots: IndexMap<String, Slot>,
    filters: IndexMap<String, Filter>,
}

impl Lookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `id` can be registered.
    fn ensure_slot_available(&self, id: &str) -> Result<(), ExtensionError> {
        if self.slots.contains_key(id) {
            return Err(ExtensionError::DuplicateSlot { id: id.to_owned() });
        }
        Ok(())
    }

    /// Make `slot` addressable by its label.
    pub fn register_slot(&mut self, slot: Slot) -> Result<(), ExtensionError> {
        self.ensure_slot_available(slot.id())?;
        self.slots.insert(slot.id().to_owned(), slot);
        Ok(())
    }

    /// Make `filter` addressable by `name`.
    pub fn register_filter(
        &mut self,
        name: impl Into<String>,
        filter: Filter,
    ) -> Result<(), ExtensionError> {
        let name = name.into();
        if self.filters.contains_key(&name) {
            return Err(ExtensionError::DuplicateFilter { name });
        }
        self.filters.insert(name, filter);
        Ok(())
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.get(id)
    }

    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    /// Recognise the shape of `value` and resolve the ids it references.
    ///
    /// Accepted shapes are a slot id, an array holding a slot id and an
    /// optional filter name, and a canonical object keyed by the namespaced
    /// field names. Anything else is an [`ExtensionError::InvalidQuery`].
    pub fn terse(&self, value: &Value) -> Result<TerseQuery, ExtensionError> {
        let invalid = || ExtensionError::invalid_query(value);
        match value {
            Value::String(id) => self
                .slot_by_value(id)
                .map(TerseQuery::Bare)
                .ok_or_else(invalid),
            Value::Array(items) if matches!(items.len(), 1 | 2) => {
                let slot = items[0]
                    .as_str()
                    .and_then(|id| self.slot_by_value(id))
                    .ok_or_else(invalid)?;
                match items.get(1) {
                    None | Some(Value::Null) => Ok(TerseQuery::All(slot)),
                    Some(filter) => {
                        let filter = self.filter_by_value(filter).ok_or_else(invalid)?;
                        Ok(TerseQuery::Filtered(slot, filter))
                    }
                }
            }
            Value::Object(fields) if fields.contains_key(Field::SlotOf.name()) => {
                let slot = fields[Field::SlotOf.name()]
                    .as_str()
                    .and_then(|id| self.slot_by_value(id))
                    .ok_or_else(invalid)?;
                let one = match fields.get(Field::One.name()) {
                    None => false,
                    Some(flag) => flag.as_bool().ok_or_else(invalid)?,
                };
                let filter = match fields.get(Field::Filter.name()) {
                    None | Some(Value::Null) => Filter::always(),
                    Some(filter) => self.filter_by_value(filter).ok_or_else(invalid)?,
                };
                Ok(TerseQuery::Canonical(Query::new(slot, one, filter)))
            }
            _ => Err(invalid()),
        }
    }

    /// Resolve and normalize a single query value.
    pub fn query(&self, value: &Value) -> Result<Query, ExtensionError> {
        self.terse(value).map(parse_query)
    }

    /// Resolve and normalize every query of a declaration, preserving keys.
    pub fn deps<'a, I>(&self, decl: I) -> Result<Deps, ExtensionError>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        decl.into_iter()
            .map(|(key, value)| Ok((key.clone(), self.query(value)?)))
            .collect()
    }

    /// Resolve a `[slot, filter]` pair for the selector.
    pub fn selection(&self, value: &Value) -> Result<Selection, ExtensionError> {
        let pair = match value {
            Value::Array(items) if items.len() == 2 => items,
            _ => {
                return Err(ExtensionError::invalid_argument(
                    "the query must be a tuple of length 2",
                ));
            }
        };
        let invalid = || ExtensionError::invalid_query(value);
        let slot = pair[0]
            .as_str()
            .and_then(|id| self.slot_by_value(id))
            .ok_or_else(invalid)?;
        let filter = match &pair[1] {
            Value::Null => Filter::always(),
            filter => self.filter_by_value(filter).ok_or_else(invalid)?,
        };
        Ok(Selection::new(slot, filter))
    }

    fn slot_by_value(&self, id: &str) -> Option<Slot> {
        let slot = self.slots.get(id).cloned();
        if slot.is_none() {
            trace!("unknown slot id '{id}'");
        }
        slot
    }

    fn filter_by_value(&self, value: &Value) -> Option<Filter> {
        let name = value.as_str()?;
        let filter = self.filters.get(name).cloned();
        if filter.is_none() {
            trace!("unknown filter '{name}'");
        }
        filter
    }
}
