//! Singleton - a process-wide holder with a single lazily built instance.
//!
//! The `singleton` binary in `singleton-cli` drives the holder; this crate
//! re-exports the library side.

pub use singleton_holder as holder;
pub use singleton_utils as utils;

// Re-export commonly used types for convenience
pub use singleton_holder::{Holder, HolderError, HolderState};
pub use singleton_utils::InstanceContainer;
