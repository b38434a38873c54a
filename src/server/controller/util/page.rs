use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

use crate::{
    model::session::SessionBlob,
    server::{
        error::Error,
        model::{
            app::WebUiState,
            session::{
                blob::SessionBlobCookie, message::MessageCookie, product::ProductCountCookie,
            },
        },
        view::PageContext,
    },
};

/// Collects what every page renders: categories, login state and cookie-carried state.
///
/// Takes the pending message out of `jar`, the returned jar expires its cookie and must be
/// part of the response.
///
/// # Returns
/// - `Ok((CookieJar, SessionBlob, PageContext))` - Response cookies, session of the visitor
///   and the data of the page frame
/// - `Err(Error::SessionError)` - Session cookie corrupted
/// - `Err(Error::StoreError)` - Persistence or auth service call failed
pub async fn load_page_context(
    state: &WebUiState,
    headers: &HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, SessionBlob, PageContext), Error> {
    let blob = SessionBlobCookie::get(headers)?;

    let categories = state.persistence.list_categories().await?;
    let logged_in = state.store.is_logged_in(&blob).await?;

    let product_count = ProductCountCookie::get(&jar);
    let (jar, message) = MessageCookie::take(jar);

    let context = PageContext {
        context_path: state.context_path.clone(),
        categories,
        logged_in,
        message,
        product_count,
    };

    Ok((jar, blob, context))
}
