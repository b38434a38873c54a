//! Data transfer objects shared between the persistence service, the web UI and the remote
//! store backends.

pub mod api;
pub mod category;
pub mod session;
