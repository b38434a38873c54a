//! Session blob cookie codec.
//!
//! The cookie value is the JSON of the blob, form-URL-encoded (spaces as `+`). That is the only
//! encoding layer: the cookie is read from the raw `Cookie` header and written as a raw
//! `Set-Cookie` header, bypassing the percent-encoding of the `CookieJar`.
//!
//! Decoding is strict: a cookie that is present but can't be decoded is an error, the visitor
//! is never silently turned into an anonymous one.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};
use axum_extra::extract::cookie::Cookie;

use crate::{
    model::session::SessionBlob,
    server::{
        error::{session::SessionError, Error},
        model::session::COOKIE_PATH,
    },
};

/// Name of the session blob cookie.
pub const SESSION_BLOB_COOKIE: &str = "sessionBlob";

/// Encodes a blob into a cookie value.
pub fn encode(blob: &SessionBlob) -> Result<String, SessionError> {
    let json = serde_json::to_string(blob)?;

    Ok(url::form_urlencoded::byte_serialize(json.as_bytes()).collect())
}

/// Decodes a cookie value into a blob.
///
/// # Returns
/// - `Ok(SessionBlob)` - The decoded blob
/// - `Err(SessionError::Corrupted)` - Value is not URL-encoded UTF-8 JSON of a blob
pub fn decode(value: &str) -> Result<SessionBlob, SessionError> {
    let unplussed = value.replace('+', " ");
    let json = percent_encoding::percent_decode_str(&unplussed)
        .decode_utf8()
        .map_err(|e| SessionError::Corrupted(e.to_string()))?;

    serde_json::from_str(&json).map_err(|e| SessionError::Corrupted(e.to_string()))
}

pub struct SessionBlobCookie;

impl SessionBlobCookie {
    /// Reads the session blob from the `Cookie` headers of the request.
    ///
    /// # Returns
    /// - `Ok(SessionBlob)` - Decoded blob, or a fresh anonymous one if no cookie was sent
    /// - `Err(Error::SessionError)` - Cookie present but corrupted
    pub fn get(headers: &HeaderMap) -> Result<SessionBlob, Error> {
        let cookie = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == SESSION_BLOB_COOKIE);

        match cookie {
            Some(cookie) => Ok(decode(cookie.value())?),
            None => Ok(SessionBlob::default()),
        }
    }

    /// `Set-Cookie` header storing `blob` in the session cookie.
    pub fn save(blob: &SessionBlob) -> Result<(HeaderName, HeaderValue), Error> {
        let cookie = Cookie::build((SESSION_BLOB_COOKIE, encode(blob)?))
            .path(COOKIE_PATH)
            .build();

        set_cookie(&cookie)
    }

    /// `Set-Cookie` header expiring the session cookie, keeping `blob` as its final value.
    pub fn destroy(blob: &SessionBlob) -> Result<(HeaderName, HeaderValue), Error> {
        let cookie = Cookie::build((SESSION_BLOB_COOKIE, encode(blob)?))
            .path(COOKIE_PATH)
            .max_age(time::Duration::ZERO)
            .build();

        set_cookie(&cookie)
    }
}

fn set_cookie(cookie: &Cookie<'_>) -> Result<(HeaderName, HeaderValue), Error> {
    let value = HeaderValue::from_str(&cookie.to_string()).map_err(SessionError::from)?;

    Ok((header::SET_COOKIE, value))
}
