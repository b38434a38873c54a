use axum_extra::extract::{cookie::Cookie, CookieJar};

use crate::server::model::session::COOKIE_PATH;

/// Name of the one-shot message cookie.
pub const MESSAGE_COOKIE: &str = "petsupplystoreMessageCookie";

/// Status message handed from a redirecting action to the page rendered next.
///
/// Spaces are stored as underscores in the cookie value.
pub struct MessageCookie;

impl MessageCookie {
    /// Stores `message` for the next rendered page.
    pub fn insert(jar: CookieJar, message: &str) -> CookieJar {
        jar.add(Cookie::build((MESSAGE_COOKIE, message.replace(' ', "_"))).path(COOKIE_PATH))
    }

    /// Takes the pending message, expiring the cookie in the response.
    pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
        let Some(message) = jar
            .get(MESSAGE_COOKIE)
            .map(|cookie| cookie.value().replace('_', " "))
        else {
            return (jar, None);
        };

        let jar = jar.remove(Cookie::build(MESSAGE_COOKIE).path(COOKIE_PATH));

        (jar, Some(message))
    }
}
