//! Declarative test builder.
//!
//! Configuration methods only queue work; everything is executed in order by the final
//! `build()` call.

use mockito::Mock;
use sea_orm::Schema;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    categories: usize,
    mock_builders: Vec<Box<dyn FnOnce(&mut TestSetup) -> Mock>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            categories: 0,
            mock_builders: Vec::new(),
        }
    }

    /// Create the category table and insert `count` mock categories.
    ///
    /// Inserted rows are available through [`TestSetup::categories`].
    pub fn with_categories(mut self, count: usize) -> Self {
        self.categories = count;
        self
    }

    /// Mock login endpoint accepting the test credentials.
    pub fn with_login_endpoint(self, expected_requests: usize) -> Self {
        self.with_fixture_endpoint(move |setup| {
            setup.backend().create_login_endpoint(expected_requests)
        })
    }

    /// Mock login endpoint rejecting all credentials.
    pub fn with_rejecting_login_endpoint(self, expected_requests: usize) -> Self {
        self.with_fixture_endpoint(move |setup| {
            setup
                .backend()
                .create_rejecting_login_endpoint(expected_requests)
        })
    }

    /// Mock logout endpoint.
    pub fn with_logout_endpoint(self, expected_requests: usize) -> Self {
        self.with_fixture_endpoint(move |setup| {
            setup.backend().create_logout_endpoint(expected_requests)
        })
    }

    /// Mock `isloggedin` endpoint reporting `logged_in`.
    pub fn with_is_logged_in_endpoint(self, logged_in: bool, expected_requests: usize) -> Self {
        self.with_fixture_endpoint(move |setup| {
            setup
                .backend()
                .create_is_logged_in_endpoint(logged_in, expected_requests)
        })
    }

    /// Mock persistence category list endpoint serving `names`.
    pub fn with_categories_endpoint(
        self,
        names: &'static [&'static str],
        expected_requests: usize,
    ) -> Self {
        self.with_fixture_endpoint(move |setup| {
            setup
                .backend()
                .create_categories_endpoint(names, expected_requests)
        })
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.with_fixture_endpoint(move |test| setup(&mut test.server))
    }

    fn with_fixture_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut TestSetup) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup.
    ///
    /// Executes the queued operations in order:
    /// 1. Creates the category table if categories were requested
    /// 2. Inserts category fixtures
    /// 3. Creates mock HTTP endpoints
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        if self.categories > 0 {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            let mut stmt = schema.create_table_from_entity(entity::prelude::Category);
            stmt.if_not_exists();
            setup.with_tables(vec![stmt]).await?;
        }

        for index in 1..=self.categories {
            setup.category().insert_mock_category(index).await?;
        }

        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup));
        }
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
