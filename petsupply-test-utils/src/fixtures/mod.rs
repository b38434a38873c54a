//! Test fixtures for database rows and mock backend endpoints.
//!
//! - `category` - Category rows inserted into the test database
//! - `backend` - Mock auth and persistence endpoints on the `mockito` server

pub mod backend;
pub mod category;

use crate::TestSetup;

impl TestSetup {
    /// Access category database fixtures.
    pub fn category(&mut self) -> category::CategoryFixtures<'_> {
        category::CategoryFixtures { setup: self }
    }

    /// Access mock backend endpoint fixtures.
    pub fn backend(&mut self) -> backend::BackendFixtures<'_> {
        backend::BackendFixtures { setup: self }
    }
}
