use axum::{
    extract::{rejection::FormRejection, State},
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use dioxus_logger::tracing;
use serde::Deserialize;

use crate::server::{
    controller::util::redirect::redirect,
    error::Error,
    model::{app::WebUiState, session::blob::SessionBlobCookie},
};

/// Message shown after a successful login.
pub const LOGIN_MESSAGE: &str = "You are logged in!";
/// Message shown after a logout.
pub const LOGOUT_MESSAGE: &str = "You are logged out!";

/// Fields posted by the login and logout forms.
#[derive(Debug, Default, Deserialize)]
pub struct LoginActionForm {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Page the visitor came from before opening the login page.
    pub referer: Option<String>,
    pub logout: Option<String>,
}

/// The login action only accepts form posts, a plain visit goes back to the home page.
pub async fn login_action(
    State(state): State<WebUiState>,
    jar: CookieJar,
) -> Result<Response, Error> {
    Ok(redirect(&state.context_path, "/", jar, None))
}

/// Logs the visitor in or out.
///
/// - With `username` & `password`, logs in through the auth service. The returned session is
///   saved either way. On success redirects to the cart if the login page was opened from the
///   cart, else to the home page. Rejected credentials go back to the login page.
/// - With `logout`, logs out through the auth service and expires the session cookie.
/// - Without either, behaves like [`login_action`].
pub async fn login_action_post(
    State(state): State<WebUiState>,
    headers: HeaderMap,
    jar: CookieJar,
    form: Result<Form<LoginActionForm>, FormRejection>,
) -> Result<Response, Error> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable login form: {}", rejection);

            LoginActionForm::default()
        }
    };

    match form {
        LoginActionForm {
            username: Some(username),
            password: Some(password),
            referer,
            ..
        } => {
            let blob = SessionBlobCookie::get(&headers)?;
            let blob = state.store.login(&blob, &username, &password).await?;
            let session_cookie = AppendHeaders([SessionBlobCookie::save(&blob)?]);

            if !blob.has_session() {
                tracing::debug!("Login of user {} was rejected", username);

                return Ok((
                    session_cookie,
                    redirect(&state.context_path, "/login", jar, None),
                )
                    .into_response());
            }

            let cart_path = format!("{}/cart", state.context_path);
            let target = match referer {
                Some(referer) if referer.contains(&cart_path) => "/cart",
                _ => "/",
            };

            Ok((
                session_cookie,
                redirect(&state.context_path, target, jar, Some(LOGIN_MESSAGE)),
            )
                .into_response())
        }
        LoginActionForm {
            logout: Some(_), ..
        } => {
            let blob = SessionBlobCookie::get(&headers)?;
            let blob = state.store.logout(&blob).await?;
            let session_cookie = AppendHeaders([SessionBlobCookie::destroy(&blob)?]);

            Ok((
                session_cookie,
                redirect(&state.context_path, "/", jar, Some(LOGOUT_MESSAGE)),
            )
                .into_response())
        }
        _ => login_action(State(state), jar).await,
    }
}
