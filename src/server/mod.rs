//! Server side of the pet supply store.
//!
//! Both services are assembled from the same modules: the persistence service uses `data` and
//! the `category` controller, the web UI uses the backend `client`s, the session cookies in
//! `model` and the server-rendered `view`s.

pub mod client;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod view;
