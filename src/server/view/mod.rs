//! Server-rendered storefront pages.
//!
//! Pages are dioxus components rendered to HTML strings with `dioxus_ssr`. Every page shares
//! the [`layout::Layout`] frame, which needs the per-request [`PageContext`]. The document
//! shell around the rendered body is plain markup.

pub mod cart;
pub mod error;
pub mod index;
pub mod layout;
pub mod login;

use axum::response::Html;
use dioxus::prelude::*;

use crate::model::category::CategoryDto;

use self::layout::Layout;

/// Per-request data rendered by the shared page frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContext {
    /// Prefix of every link, empty when served at the root.
    pub context_path: String,
    /// Categories shown in the side bar.
    pub categories: Vec<CategoryDto>,
    /// Whether the auth service validated the session of the visitor.
    pub logged_in: bool,
    /// One-shot status message left by the previous action.
    pub message: Option<String>,
    /// Cart badge count.
    pub product_count: Option<u32>,
}

impl PageContext {
    /// Builds an absolute link to `path` below the context path.
    pub fn link(&self, path: &str) -> String {
        format!("{}/{}", self.context_path, path.trim_start_matches('/'))
    }
}

/// Renders `content` inside the page frame as a complete HTML document.
///
/// `title` is inserted verbatim and must not contain markup.
pub fn render(title: &str, context: PageContext, content: Element) -> Html<String> {
    let body = dioxus_ssr::render_element(rsx! {
        Layout { context, {content} }
    });

    Html(format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{}</title></head><body>{}</body></html>"
        ),
        title, body
    ))
}
