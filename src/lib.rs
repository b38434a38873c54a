//! Pet supply store services.
//!
//! The crate builds two binaries from one library: the `persistence` service exposing CRUD
//! endpoints over catalog categories, and the `webui` service rendering the storefront pages
//! with a cookie-carried session blob.

pub mod model;
pub mod server;
