//! Service configuration read from environment variables.
//!
//! Both binaries call `dotenvy::dotenv()` first, so values may also come from a `.env` file.

use std::{net::SocketAddr, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_PERSISTENCE_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WEBUI_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 2000;

/// Configuration of the persistence service.
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl PersistenceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: parse_bind_addr("PERSISTENCE_BIND_ADDR", DEFAULT_PERSISTENCE_BIND_ADDR)?,
        })
    }
}

/// Configuration of the web UI service.
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub bind_addr: SocketAddr,
    /// Path prefix the UI is served under, either empty or starting with `/` and without a
    /// trailing slash.
    pub context_path: String,
    /// Base URLs of the auth service instances providing store operations.
    pub store_urls: Vec<Url>,
    /// Base URLs of the persistence service instances.
    pub persistence_urls: Vec<Url>,
    /// Timeout applied to every backend request.
    pub backend_timeout: Duration,
}

impl WebUiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_timeout_ms = match std::env::var("BACKEND_TIMEOUT_MS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid("BACKEND_TIMEOUT_MS", e))?,
            Err(_) => DEFAULT_BACKEND_TIMEOUT_MS,
        };

        Ok(Self {
            bind_addr: parse_bind_addr("WEBUI_BIND_ADDR", DEFAULT_WEBUI_BIND_ADDR)?,
            context_path: normalize_context_path(
                &std::env::var("WEBUI_CONTEXT_PATH").unwrap_or_default(),
            ),
            store_urls: parse_urls("STORE_URLS", &required("STORE_URLS")?)?,
            persistence_urls: parse_urls("PERSISTENCE_URLS", &required("PERSISTENCE_URLS")?)?,
            backend_timeout: Duration::from_millis(backend_timeout_ms),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_bind_addr(var: &str, default: &str) -> Result<SocketAddr, ConfigError> {
    std::env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| ConfigError::invalid(var, e))
}

/// Parses a comma separated list of base URLs, ignoring blank entries.
pub fn parse_urls(var: &str, value: &str) -> Result<Vec<Url>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| Url::parse(entry).map_err(|e| ConfigError::invalid(var, e)))
        .collect()
}

/// Normalizes a context path to either `""` or `/segment[/segment...]`.
pub fn normalize_context_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
