use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Static metadata describing an extension point.
#[derive(Debug)]
pub struct SlotDescriptor {
    /// Human readable label. Labels are not unique and play no part in equality.
    pub id: Cow<'static, str>,
}

impl SlotDescriptor {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
        }
    }
}

#[derive(Clone)]
enum Backing {
    Static(&'static SlotDescriptor),
    Shared(Arc<SlotDescriptor>),
}

/// Identifies a single extension point.
///
/// Slots compare by the identity of their backing descriptor, so two slots
/// created with the same label never match each other.
#[derive(Clone)]
pub struct Slot {
    backing: Backing,
}

impl Slot {
    /// Create a slot backed by a statically declared descriptor.
    #[must_use]
    pub const fn from_descriptor(descriptor: &'static SlotDescriptor) -> Self {
        Self {
            backing: Backing::Static(descriptor),
        }
    }

    /// Allocate a fresh slot. Every call yields a distinct slot.
    #[must_use]
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            backing: Backing::Shared(Arc::new(SlotDescriptor { id: id.into() })),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &SlotDescriptor {
        match &self.backing {
            Backing::Static(descriptor) => *descriptor,
            Backing::Shared(descriptor) => descriptor.as_ref(),
        }
    }

    /// Label of the slot, for diagnostics only.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.descriptor().id
    }

    fn as_ptr(&self) -> *const SlotDescriptor {
        self.descriptor() as *const SlotDescriptor
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.id()).finish()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl Eq for Slot {}

impl Hash for Slot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.as_ptr(), state);
    }
}
