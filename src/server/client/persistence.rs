//! Client for the persistence service, as seen by the web UI.

use crate::{
    model::category::CategoryDto,
    server::{client::LoadBalancer, error::store::StoreError},
};

/// Service name of the persistence backend, used in errors and logs.
pub const PERSISTENCE_SERVICE: &str = "persistence";

#[derive(Clone, Debug)]
pub struct PersistenceClient {
    lb: LoadBalancer,
}

impl PersistenceClient {
    pub fn new(lb: LoadBalancer) -> Self {
        Self { lb }
    }

    /// Fetches all categories, in ID order.
    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>, StoreError> {
        let url = self.lb.endpoint("categories")?;

        self.lb.send(self.lb.http().get(url)).await
    }
}
