//! Data access layer repositories.
//!
//! Repositories are thin wrappers over sea-orm queries, one per entity, generic over
//! `ConnectionTrait` so they work with a pooled connection or inside a transaction.

pub mod category;
