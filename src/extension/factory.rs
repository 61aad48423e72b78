use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Runtime value produced by a factory.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// A dependency as handed to a factory by a resolution engine.
#[derive(Clone)]
pub enum Provided {
    /// Result of a query expecting exactly one extension.
    One(Instance),
    /// Results of a collection query, in selection order.
    Many(Vec<Instance>),
}

impl Provided {
    /// Downcast a singleton dependency.
    pub fn one<T: Any + Send + Sync>(&self) -> Option<&T> {
        match self {
            Self::One(instance) => instance.downcast_ref::<T>(),
            Self::Many(_) => None,
        }
    }

    /// Downcast every element of a collection dependency, skipping mismatches.
    pub fn many<T: Any + Send + Sync>(&self) -> Vec<&T> {
        match self {
            Self::One(_) => Vec::new(),
            Self::Many(instances) => instances
                .iter()
                .filter_map(|instance| instance.downcast_ref::<T>())
                .collect(),
        }
    }
}

impl fmt::Debug for Provided {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(_) => f.write_str("One(..)"),
            Self::Many(instances) => write!(f, "Many(len = {})", instances.len()),
        }
    }
}

/// Realized dependencies keyed by the names used in the declaration.
pub type Resolved = IndexMap<String, Provided>;

type FactoryFn = dyn Fn(&Resolved) -> Instance + Send + Sync;

/// Callable used to produce an extension's runtime value.
///
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
    /// Wrap a closure returning any sendable value.
    pub fn new<F, T>(factory: F) -> Self
    where
        F: Fn(&Resolved) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self(Arc::new(move |deps: &Resolved| -> Instance {
            Arc::new(factory(deps))
        }))
    }

    /// Invoke the factory with realized dependencies.
    pub fn call(&self, deps: &Resolved) -> Instance {
        (self.0)(deps)
    }

    /// Returns `true` when both handles share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory(..)")
    }
}
