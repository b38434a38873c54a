//! Server-side models: service state and the cookies carrying per-visitor state.

pub mod app;
pub mod session;
