//! Clients for the remote backends the web UI depends on.
//!
//! Every backend may run as several instances. [`LoadBalancer`] holds their base URLs and
//! spreads calls across them round-robin; the typed clients ([`store::StoreClient`],
//! [`persistence::PersistenceClient`]) build their requests on top of it. A call is attempted
//! once, failures are classified by [`StoreError`] and never retried.

pub mod persistence;
pub mod store;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use dioxus_logger::tracing;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::error::store::StoreError;

/// Round-robin selection over the instances of one backend service.
///
/// Cheap to clone: the instance list and the rotation counter are shared between clones, so
/// all request handlers rotate through the same sequence.
#[derive(Clone, Debug)]
pub struct LoadBalancer {
    service: &'static str,
    http: reqwest::Client,
    instances: Arc<[Url]>,
    next: Arc<AtomicUsize>,
}

impl LoadBalancer {
    /// Creates a load balancer for `service` over the given instance base URLs.
    ///
    /// Base URLs are treated as directories, `http://auth/rest` and `http://auth/rest/` both
    /// resolve `useractions/login` to `http://auth/rest/useractions/login`.
    pub fn new(service: &'static str, http: reqwest::Client, instances: Vec<Url>) -> Self {
        let instances: Vec<Url> = instances.into_iter().map(as_directory).collect();

        Self {
            service,
            http,
            instances: instances.into(),
            next: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Resolves `path` against the next instance in the rotation.
    ///
    /// # Returns
    /// - `Ok(Url)` - Absolute URL of the endpoint on the chosen instance
    /// - `Err(StoreError::NoInstances)` - No instance configured for the service
    /// - `Err(StoreError::InvalidUrl)` - `path` could not be joined to the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        if self.instances.is_empty() {
            return Err(StoreError::NoInstances(self.service));
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.instances.len();

        self.instances[index]
            .join(path.trim_start_matches('/'))
            .map_err(|source| StoreError::InvalidUrl {
                service: self.service,
                source,
            })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sends a prepared request and decodes the JSON response body.
    ///
    /// Gateway style statuses (502, 503, 504) mean the instance can't serve the call and are
    /// reported as unavailable, other non-success statuses as unexpected.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::from_reqwest(self.service, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                service = self.service,
                status = %status,
                "Backend responded with non-success status"
            );

            return Err(match status {
                StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT => StoreError::Unavailable {
                    service: self.service,
                    status,
                },
                status => StoreError::UnexpectedStatus {
                    service: self.service,
                    status,
                },
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| StoreError::Decode {
                service: self.service,
                source,
            })
    }
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}
