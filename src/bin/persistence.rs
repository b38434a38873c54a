use dioxus_logger::tracing::{self, Level};
use petsupply::server::{config::PersistenceConfig, model::app::PersistenceState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match PersistenceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting persistence service");

    let app = startup::persistence_app(PersistenceState { db });
    if let Err(e) = startup::serve(config.bind_addr, app).await {
        tracing::error!("Persistence service stopped: {}", e);
        std::process::exit(1);
    }
}
