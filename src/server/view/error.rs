use axum::response::Html;
use dioxus::prelude::*;

use crate::server::view::{render, PageContext};

pub const TIMEOUT_TITLE: &str = "408 : Pet Supply Store Timeout";

/// Page served when a backend could not be reached in time.
///
/// Rendered without any backend data: no categories and the visitor shown as logged out.
pub fn timeout_page() -> Html<String> {
    render(
        TIMEOUT_TITLE,
        PageContext::default(),
        rsx! {
            h2 { "Timeout" }
            p { class: "error-message",
                "The store did not respond in time. Please try again later."
            }
        },
    )
}
