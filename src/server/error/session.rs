use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures of the session cookie codec.
///
/// A corrupted cookie is fatal for the request: no sanitized default can be trusted, so the
/// visitor is not silently reset to an anonymous session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session cookie corrupted: {0}")]
    Corrupted(String),
    #[error("Could not serialize session blob: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Session cookie is not a valid header value: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
