use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::server::model::session::message::MessageCookie;

/// Redirects to `target` below the context path, optionally leaving a message for the next
/// rendered page.
///
/// Responds with 303 See Other so a redirected form POST is followed with a GET. Cookies
/// already set on `jar` are sent along with the redirect.
///
/// # Arguments
/// - `context_path` - Path prefix of the web UI, empty when served at the root
/// - `target` - Page to redirect to, a leading `/` is added if missing
/// - `jar` - Cookies of the response
/// - `message` - Status message to show on the next page
pub fn redirect(
    context_path: &str,
    target: &str,
    jar: CookieJar,
    message: Option<&str>,
) -> Response {
    let target = if target.starts_with('/') {
        target.to_string()
    } else {
        format!("/{}", target)
    };

    let jar = match message {
        Some(message) => MessageCookie::insert(jar, message),
        None => jar,
    };

    (jar, Redirect::to(&format!("{}{}", context_path, target))).into_response()
}
