use std::net::SocketAddr;

use axum::Router;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::server::{
    client::{
        persistence::{PersistenceClient, PERSISTENCE_SERVICE},
        store::{StoreClient, AUTH_SERVICE},
        LoadBalancer,
    },
    config::{PersistenceConfig, WebUiConfig},
    error::Error,
    model::app::{PersistenceState, WebUiState},
    router,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(
    config: &PersistenceConfig,
) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the load-balanced backend clients of the web UI
///
/// Both clients share one HTTP connection pool, every request is bounded by the configured
/// backend timeout.
pub fn build_webui_state(config: &WebUiConfig) -> Result<WebUiState, Error> {
    let http = reqwest::Client::builder()
        .timeout(config.backend_timeout)
        .build()?;

    let store = StoreClient::new(LoadBalancer::new(
        AUTH_SERVICE,
        http.clone(),
        config.store_urls.clone(),
    ));
    let persistence = PersistenceClient::new(LoadBalancer::new(
        PERSISTENCE_SERVICE,
        http,
        config.persistence_urls.clone(),
    ));

    Ok(WebUiState {
        store,
        persistence,
        context_path: config.context_path.clone(),
    })
}

pub fn persistence_app(state: PersistenceState) -> Router {
    router::persistence_routes().with_state(state)
}

pub fn webui_app(state: WebUiState) -> Router {
    router::webui_routes(&state.context_path).with_state(state)
}

/// Serve `app` on `bind_addr` until the process is stopped
pub async fn serve(bind_addr: SocketAddr, app: Router) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app.layer(TraceLayer::new_for_http())).await?;

    Ok(())
}
