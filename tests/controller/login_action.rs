use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use petsupply::{
    model::session::SessionBlob,
    server::{
        controller::login::{login_action, login_action_post, LoginActionForm},
        error::Error,
        model::session::{
            blob::{decode, encode, SESSION_BLOB_COOKIE},
            message::MESSAGE_COOKIE,
        },
        view::error::TIMEOUT_TITLE,
    },
};
use mockito::Matcher;
use petsupply_test_utils::{
    constant::{TEST_PASSWORD, TEST_SESSION_ID, TEST_USERNAME, UNREACHABLE_URL},
    prelude::*,
};

use serde_json::json;

use crate::util::{
    body_string, location, request_headers, request_jar, response_cookie, webui_state,
};

fn login_form(referer: Option<&str>) -> LoginActionForm {
    LoginActionForm {
        username: Some(TEST_USERNAME.to_string()),
        password: Some(TEST_PASSWORD.to_string()),
        referer: referer.map(str::to_string),
        logout: None,
    }
}

fn logout_form() -> LoginActionForm {
    LoginActionForm {
        logout: Some("logout".to_string()),
        ..Default::default()
    }
}

fn into_response(result: Result<Response, Error>) -> Response {
    match result {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

fn logged_in_blob() -> SessionBlob {
    SessionBlob {
        uid: Some(1),
        sid: Some(TEST_SESSION_ID.to_string()),
        ..Default::default()
    }
}

mod login {
    use super::*;

    /// Expect 303 to the home page with the session saved and the login message
    #[tokio::test]
    async fn redirects_home_with_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_login_endpoint(1).build().await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(login_form(None))),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");

        let blob_cookie = response_cookie(&resp, SESSION_BLOB_COOKIE).unwrap();
        let blob = decode(blob_cookie.value()).unwrap();
        assert_eq!(blob.sid.as_deref(), Some(TEST_SESSION_ID));
        assert_eq!(blob_cookie.value(), encode(&blob).unwrap());

        let message = response_cookie(&resp, MESSAGE_COOKIE).unwrap();
        assert_eq!(message.value(), "You_are_logged_in!");
        test.assert_mocks();

        Ok(())
    }

    /// Expect a redirect back to the cart when the login page was opened from the cart
    #[tokio::test]
    async fn redirects_to_cart_for_cart_referer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_login_endpoint(1).build().await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "/store");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(login_form(Some("http://localhost:8081/store/cart")))),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/store/cart");
        test.assert_mocks();

        Ok(())
    }

    /// Expect the home page for any other referer
    #[tokio::test]
    async fn redirects_home_for_other_referer() -> Result<(), TestError> {
        let test = TestBuilder::new().with_login_endpoint(1).build().await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "/store");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(login_form(Some("http://localhost:8081/store/login")))),
        )
        .await;

        assert_eq!(location(&result.unwrap()), "/store/");

        Ok(())
    }

    /// Expect rejected credentials to redirect to the login page without message
    #[tokio::test]
    async fn redirects_to_login_when_rejected() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_rejecting_login_endpoint(1)
            .build()
            .await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(login_form(None))),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(location(&resp), "/login");
        assert!(response_cookie(&resp, MESSAGE_COOKIE).is_none());

        let blob_cookie = response_cookie(&resp, SESSION_BLOB_COOKIE).unwrap();
        assert!(!decode(blob_cookie.value()).unwrap().has_session());
        test.assert_mocks();

        Ok(())
    }

    /// Expect the timeout page when the auth service is unreachable
    #[tokio::test]
    async fn returns_timeout_page_when_unreachable() -> Result<(), TestError> {
        let state = webui_state(UNREACHABLE_URL, UNREACHABLE_URL, "");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(login_form(None))),
        )
        .await;

        assert!(result.is_err());
        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(body_string(resp).await.contains(TIMEOUT_TITLE));

        Ok(())
    }

    /// Expect 500 for a corrupted session cookie, without calling the auth service
    #[tokio::test]
    async fn fails_for_corrupted_session_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new().with_login_endpoint(0).build().await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");

        let result = login_action_post(
            State(state),
            request_headers(&[(SESSION_BLOB_COOKIE, "%7Bnot-json")]),
            request_jar(&[]),
            Ok(Form(login_form(None))),
        )
        .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        test.assert_mocks();

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect the session cookie to be expired with a redirect home and the logout message
    #[tokio::test]
    async fn expires_session_cookie() -> Result<(), TestError> {
        let test = TestBuilder::new().with_logout_endpoint(1).build().await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");
        let blob = encode(&logged_in_blob()).unwrap();

        let result = login_action_post(
            State(state),
            request_headers(&[(SESSION_BLOB_COOKIE, &blob)]),
            request_jar(&[]),
            Ok(Form(logout_form())),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");

        let blob_cookie = response_cookie(&resp, SESSION_BLOB_COOKIE).unwrap();
        assert_eq!(blob_cookie.max_age(), Some(time::Duration::ZERO));
        assert!(!decode(blob_cookie.value()).unwrap().has_session());

        let message = response_cookie(&resp, MESSAGE_COOKIE).unwrap();
        assert_eq!(message.value(), "You_are_logged_out!");
        test.assert_mocks();

        Ok(())
    }

    /// Expect a `+` escaped in the session cookie to reach the auth service as a literal `+`
    #[tokio::test]
    async fn forwards_escaped_plus_in_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/useractions/logout")
                    .match_body(Matcher::PartialJson(json!({"token": "x+y"})))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"sid":null}"#)
                    .expect(1)
                    .create()
            })
            .build()
            .await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");
        let blob = SessionBlob {
            token: Some("x+y".to_string()),
            ..logged_in_blob()
        };
        let cookie = encode(&blob).unwrap();
        assert!(cookie.contains("x%2By"));

        let result = login_action_post(
            State(state),
            request_headers(&[(SESSION_BLOB_COOKIE, &cookie)]),
            request_jar(&[]),
            Ok(Form(logout_form())),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().status(), StatusCode::SEE_OTHER);
        test.assert_mocks();

        Ok(())
    }

    /// Expect the timeout page when the auth service is unreachable
    #[tokio::test]
    async fn returns_timeout_page_when_unreachable() -> Result<(), TestError> {
        let state = webui_state(UNREACHABLE_URL, UNREACHABLE_URL, "");

        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(logout_form())),
        )
        .await;

        let resp = into_response(result);
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

        Ok(())
    }
}

mod fallback {
    use super::*;

    /// Expect a post without recognized fields to redirect home without backend calls
    #[tokio::test]
    async fn redirects_home_without_fields() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint(0)
            .with_logout_endpoint(0)
            .build()
            .await?;
        let state = webui_state(&test.server_url(), &test.server_url(), "");

        let form = LoginActionForm {
            username: Some(TEST_USERNAME.to_string()),
            ..Default::default()
        };
        let result = login_action_post(
            State(state),
            request_headers(&[]),
            request_jar(&[]),
            Ok(Form(form)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");
        assert!(response_cookie(&resp, SESSION_BLOB_COOKIE).is_none());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a plain visit of the login action to redirect home
    #[tokio::test]
    async fn get_redirects_home() {
        let state = webui_state(UNREACHABLE_URL, UNREACHABLE_URL, "/store");

        let result = login_action(State(state), request_jar(&[])).await;

        assert!(result.is_ok());
        let resp = result.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/store/");
    }
}
