//! Yew components organised as atoms, molecules and organisms.
//!
//! Every wrapper merges its base utilities with the caller's `class` through
//! [`crate::core::classes::cn`], forwards `node_ref` to its root element and
//! writes [`crate::core::attrs::ExtraAttrs`] onto that element after mount.

pub mod foundations;

pub mod atoms;
pub mod molecules;
pub mod organisms;

pub use atoms::*;
pub use foundations::*;
pub use molecules::*;
pub use organisms::*;
