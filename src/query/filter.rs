use std::fmt;
use std::sync::Arc;

use crate::extension::Extension;

type Predicate = dyn Fn(&Extension) -> bool + Send + Sync;

/// Predicate narrowing the extensions a query accepts.
///
/// Two filters are equal when they are both [`Filter::always`] or share the
/// same closure.
#[derive(Clone, Default)]
pub enum Filter {
    /// Accepts every extension.
    #[default]
    Always,
    Predicate(Arc<Predicate>),
}

impl Filter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Extension) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    #[must_use]
    pub const fn always() -> Self {
        Self::Always
    }

    /// Filter accepting extensions whose data field `key` equals `value`.
    pub fn data_eq(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        let key = key.into();
        let value = value.into();
        Self::new(move |ext| ext.data(&key) == Some(&value))
    }

    #[must_use]
    pub const fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    pub fn matches(&self, ext: &Extension) -> bool {
        match self {
            Self::Always => true,
            Self::Predicate(predicate) => predicate(ext),
        }
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Always, Self::Always) => true,
            (Self::Predicate(a), Self::Predicate(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
