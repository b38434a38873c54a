//! Error types for the pet supply store services.
//!
//! Each domain (configuration, session cookie, remote backends) has its own error enum which
//! is aggregated into [`Error`]. All of them implement `IntoResponse`, so controllers return
//! `Result<_, Error>` and the HTTP mapping lives here rather than in every handler.

pub mod config;
pub mod session;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, session::SessionError, store::StoreError},
};

/// Main error type for the pet supply store services.
///
/// Uses `thiserror`'s `#[from]` so the `?` operator converts domain and library errors
/// automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session cookie could not be decoded or encoded.
    #[error(transparent)]
    SessionError(#[from] SessionError),
    /// Call to a load-balanced backend failed.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client could not be constructed.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Listener could not be bound or the server stopped unexpectedly.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 408 Request Timeout - A backend was unreachable, rendered as the timeout page
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::SessionError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
