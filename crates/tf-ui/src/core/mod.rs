//! DOM-free models backing the components, tested on native targets.

pub mod attrs;
pub mod calendar;
pub mod carousel;
pub mod classes;
pub mod config;
pub mod error;
pub mod format;
pub mod pagination;
pub mod primitives;
pub mod range;
pub mod table;
pub mod variants;
