//! Database entities for the pet supply store.

pub mod category;
pub mod prelude;
