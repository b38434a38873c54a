//! Session state carried by the browser between requests.
//!
//! The blob is opaque to the web UI: it is created empty for anonymous visitors, handed to the
//! store backend on login & logout, and written back to the `sessionBlob` cookie as JSON.

use serde::{Deserialize, Serialize};

/// Serialized session state, round-tripped through the session cookie.
///
/// A blob without a session ID (`sid`) belongs to an anonymous visitor. Fields missing from the
/// JSON fall back to their defaults so older cookies keep decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionBlob {
    /// ID of the logged in user.
    pub uid: Option<i64>,
    /// Session ID issued by the auth backend on login.
    pub sid: Option<String>,
    /// Signature of the blob issued by the auth backend.
    pub token: Option<String>,
    /// Order being assembled in this session.
    pub order: OrderDto,
    /// Cart contents.
    pub order_items: Vec<OrderItemDto>,
}

impl SessionBlob {
    /// Whether the blob carries a session ID handed out by the auth backend.
    pub fn has_session(&self) -> bool {
        self.sid.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDto {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub time: Option<String>,
    pub total_price_in_cents: Option<i64>,
    pub address_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub credit_card_company: Option<String>,
    pub credit_card_number: Option<String>,
    pub credit_card_expiry_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemDto {
    pub id: Option<i64>,
    pub product_id: i64,
    pub order_id: Option<i64>,
    pub quantity: i64,
    pub unit_price_in_cents: i64,
}
