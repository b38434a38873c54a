use sea_orm::DatabaseConnection;

use crate::server::client::{persistence::PersistenceClient, store::StoreClient};

/// State of the persistence service.
#[derive(Clone)]
pub struct PersistenceState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for PersistenceState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// State of the web UI service.
#[derive(Clone, Debug)]
pub struct WebUiState {
    pub store: StoreClient,
    pub persistence: PersistenceClient,
    /// Path prefix prepended to redirect targets, empty when served at the root.
    pub context_path: String,
}
