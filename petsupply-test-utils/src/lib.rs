//! Shared test harness for the pet supply store crates.
//!
//! Tests either call [`TestSetup::new`] / [`test_setup_with_tables!`] directly or describe
//! their environment with [`TestBuilder`]: categories to insert and mock
//! backend endpoints to register on the `mockito` server.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestBuilder, TestError, TestSetup};
}
