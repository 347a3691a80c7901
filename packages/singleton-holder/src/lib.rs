//! Process-wide singleton holder.
//!
//! [`Holder::get_instance`] constructs the one [`Holder`] on its first call
//! and hands out the same `&'static` handle on every call after that.

pub mod error;
pub mod holder;

pub use error::{HolderError, Result};
pub use holder::{Holder, HolderState};
