//! Client for the store operations of the remote auth service.
//!
//! The auth service owns the session: the web UI only passes the current [`SessionBlob`] along
//! and stores whatever blob comes back.

use dioxus_logger::tracing;

use crate::{
    model::session::SessionBlob,
    server::{client::LoadBalancer, error::store::StoreError},
};

/// Service name of the auth backend, used in errors and logs.
pub const AUTH_SERVICE: &str = "auth";

/// Store operations, spread over the auth service instances.
#[derive(Clone, Debug)]
pub struct StoreClient {
    lb: LoadBalancer,
}

impl StoreClient {
    pub fn new(lb: LoadBalancer) -> Self {
        Self { lb }
    }

    /// Logs in a user with the given credentials.
    ///
    /// The returned blob carries a session ID (`sid`) if the credentials were accepted and
    /// none otherwise. Rejected credentials are not an error.
    ///
    /// # Arguments
    /// - `blob` - Current session of the visitor
    /// - `username` - Name entered in the login form
    /// - `password` - Password entered in the login form
    ///
    /// # Returns
    /// - `Ok(SessionBlob)` - Session as updated by the auth service
    /// - `Err(StoreError)` - Auth service unavailable or responded unexpectedly
    pub async fn login(
        &self,
        blob: &SessionBlob,
        username: &str,
        password: &str,
    ) -> Result<SessionBlob, StoreError> {
        let url = self.lb.endpoint("useractions/login")?;

        tracing::debug!(%url, "Logging in user {}", username);

        let request = self
            .lb
            .http()
            .post(url)
            .query(&[("name", username), ("password", password)])
            .json(blob);

        self.lb.send(request).await
    }

    /// Logs out the session of `blob`.
    ///
    /// # Returns
    /// - `Ok(SessionBlob)` - Session with the session ID removed
    /// - `Err(StoreError)` - Auth service unavailable or responded unexpectedly
    pub async fn logout(&self, blob: &SessionBlob) -> Result<SessionBlob, StoreError> {
        let url = self.lb.endpoint("useractions/logout")?;

        self.lb.send(self.lb.http().post(url).json(blob)).await
    }

    /// Checks with the auth service whether `blob` belongs to a valid session.
    ///
    /// The auth service validates the token of the blob, so a blob with a session ID may still
    /// be reported as logged out. The service responds with `null` for invalid sessions.
    pub async fn is_logged_in(&self, blob: &SessionBlob) -> Result<bool, StoreError> {
        let url = self.lb.endpoint("useractions/isloggedin")?;

        let validated: Option<SessionBlob> =
            self.lb.send(self.lb.http().post(url).json(blob)).await?;

        Ok(validated.is_some_and(|blob| blob.has_session()))
    }
}
