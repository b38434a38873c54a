use dioxus_logger::tracing::{self, Level};
use petsupply::server::{config::WebUiConfig, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match WebUiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match startup::build_webui_state(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to build backend clients: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        store_instances = config.store_urls.len(),
        persistence_instances = config.persistence_urls.len(),
        "Starting web UI"
    );

    if let Err(e) = startup::serve(config.bind_addr, startup::webui_app(state)).await {
        tracing::error!("Web UI stopped: {}", e);
        std::process::exit(1);
    }
}
