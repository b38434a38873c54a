//! Cookie-carried session state.
//!
//! The web UI keeps no server-side session. Everything it knows about a visitor travels in
//! plain, unsigned cookies:
//! - `blob` - The [`SessionBlob`](crate::model::session::SessionBlob) issued by the auth service
//! - `message` - A one-shot status message shown on the next rendered page
//! - `product` - The number of products in the cart, shown as the cart badge
//!
//! All cookies are set on path `/` so they are visible to every page regardless of the
//! context path.

pub mod blob;
pub mod message;
pub mod product;

/// Path every session cookie is scoped to.
pub const COOKIE_PATH: &str = "/";
