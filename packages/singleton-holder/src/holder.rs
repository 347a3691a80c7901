use std::fmt;

use singleton_utils::InstanceContainer;
use tracing::{debug, trace};

use crate::error::{HolderError, Result};

static INSTANCE: InstanceContainer<Holder> = InstanceContainer::new();

/// Lifecycle of the process-wide slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderState {
    Uninitialized,
    Initialized,
}

/// The one instance of this type that exists in the process.
///
/// There is no public constructor: the only way to obtain a `Holder` is
/// [`Holder::get_instance`], and `value` cannot change once set.
#[derive(Debug)]
pub struct Holder {
    value: String,
}

impl Holder {
    fn new(value: String) -> Self {
        Self { value }
    }

    /// Returns the process-wide instance, constructing it from `value` on the
    /// first call. Arguments passed after that are dropped unread.
    pub fn get_instance(value: impl Into<String>) -> &'static Holder {
        let mut constructed = false;
        let holder = INSTANCE.get_or_init(|| {
            constructed = true;
            Holder::new(value.into())
        });

        if constructed {
            debug!(value = %holder.value, "holder constructed");
        } else {
            trace!("holder already constructed, ignoring argument");
        }
        holder
    }

    /// Returns the instance without constructing it.
    pub fn instance() -> Result<&'static Holder> {
        INSTANCE.get().ok_or(HolderError::Uninitialized)
    }

    pub fn state() -> HolderState {
        if INSTANCE.is_init() {
            HolderState::Initialized
        } else {
            HolderState::Uninitialized
        }
    }

    /// How many times the instance has been built. At most one.
    pub fn construction_count() -> usize {
        INSTANCE.init_count()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether both handles point at the same object.
    pub fn is_same(&self, other: &Holder) -> bool {
        std::ptr::eq(self, other)
    }
}

// Equality is identity, not value comparison.
impl PartialEq for Holder {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Holder {}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
