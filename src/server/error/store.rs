use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{error::InternalServerError, view};

/// Failures of calls to load-balanced backends.
///
/// Transport-level failures (no instance, timeout, refused connection, gateway errors) are
/// recovered at the controller boundary by rendering the timeout page. Anything else is a bug
/// on one side of the contract and becomes a 500.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No instance of the {0} service is available")]
    NoInstances(&'static str),
    #[error("Request to the {service} service failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("The {service} service is unavailable, responded with {status}")]
    Unavailable {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("The {service} service responded with unexpected status {status}")]
    UnexpectedStatus {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("Failed to decode response of the {service} service: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid URL for the {service} service: {source}")]
    InvalidUrl {
        service: &'static str,
        #[source]
        source: url::ParseError,
    },
}

impl StoreError {
    /// Whether the failure is a transport-level one, for which the timeout page is served.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NoInstances(_) | Self::Transport { .. } | Self::Unavailable { .. }
        )
    }

    /// Classify a `reqwest` error raised while calling `service`.
    pub fn from_reqwest(service: &'static str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::Decode { service, source }
        } else {
            Self::Transport { service, source }
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        if self.is_unavailable() {
            tracing::warn!("{}", self);

            return (StatusCode::REQUEST_TIMEOUT, view::error::timeout_page()).into_response();
        }

        InternalServerError(self).into_response()
    }
}
