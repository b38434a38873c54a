use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;

use crate::server::{
    controller::util::page::load_page_context,
    error::Error,
    model::app::WebUiState,
    view::{cart::cart_page, index::index_page, login::login_page},
};

/// Home page listing the categories.
pub async fn index(
    State(state): State<WebUiState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let (jar, _, context) = load_page_context(&state, &headers, jar).await?;

    Ok((jar, index_page(context)))
}

/// Login form, or the logout button for a logged in visitor.
///
/// The `Referer` header is embedded in the form so the login action can return to the cart.
pub async fn login(
    State(state): State<WebUiState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let (jar, _, context) = load_page_context(&state, &headers, jar).await?;

    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    Ok((jar, login_page(context, referer)))
}

/// Cart of the session.
pub async fn cart(
    State(state): State<WebUiState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, Error> {
    let (jar, blob, context) = load_page_context(&state, &headers, jar).await?;

    Ok((jar, cart_page(context, blob.order_items)))
}
