//! Mock endpoints of the remote backends.
//!
//! The auth service endpoints mirror the store operations the web UI calls
//! (`useractions/login`, `useractions/logout`, `useractions/isloggedin`); the persistence
//! endpoint serves the category list.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_PASSWORD, TEST_SESSION_ID, TEST_SESSION_TOKEN, TEST_USERNAME, TEST_USER_ID},
    TestSetup,
};

pub struct BackendFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

/// JSON of a session blob holding the test session.
pub fn logged_in_blob() -> Value {
    json!({
        "uid": TEST_USER_ID,
        "sid": TEST_SESSION_ID,
        "token": TEST_SESSION_TOKEN,
        "order": {},
        "orderItems": []
    })
}

/// JSON of an anonymous session blob.
pub fn anonymous_blob() -> Value {
    json!({
        "uid": null,
        "sid": null,
        "token": null,
        "order": {},
        "orderItems": []
    })
}

impl<'a> BackendFixtures<'a> {
    fn json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        query: Matcher,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(query)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a login endpoint accepting the test credentials.
    ///
    /// Responds with [`logged_in_blob`] when called with [`TEST_USERNAME`] and
    /// [`TEST_PASSWORD`].
    pub fn create_login_endpoint(&mut self, expected_requests: usize) -> Mock {
        let query = Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), TEST_USERNAME.into()),
            Matcher::UrlEncoded("password".into(), TEST_PASSWORD.into()),
        ]);

        self.json_endpoint(
            "POST",
            "/useractions/login",
            query,
            &logged_in_blob(),
            expected_requests,
        )
    }

    /// Create a login endpoint rejecting any credentials with an anonymous blob.
    pub fn create_rejecting_login_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.json_endpoint(
            "POST",
            "/useractions/login",
            Matcher::Any,
            &anonymous_blob(),
            expected_requests,
        )
    }

    /// Create a logout endpoint responding with an anonymous blob.
    pub fn create_logout_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.json_endpoint(
            "POST",
            "/useractions/logout",
            Matcher::Any,
            &anonymous_blob(),
            expected_requests,
        )
    }

    /// Create an `isloggedin` endpoint reporting the given login state.
    pub fn create_is_logged_in_endpoint(
        &mut self,
        logged_in: bool,
        expected_requests: usize,
    ) -> Mock {
        let body = if logged_in {
            logged_in_blob()
        } else {
            Value::Null
        };

        self.json_endpoint(
            "POST",
            "/useractions/isloggedin",
            Matcher::Any,
            &body,
            expected_requests,
        )
    }

    /// Create a category list endpoint serving the given names.
    ///
    /// IDs are assigned from 1 in the order given.
    pub fn create_categories_endpoint(
        &mut self,
        names: &[&str],
        expected_requests: usize,
    ) -> Mock {
        let categories: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                json!({
                    "id": index + 1,
                    "name": name,
                    "description": format!("All about {}", name)
                })
            })
            .collect();

        self.json_endpoint(
            "GET",
            "/categories",
            Matcher::Any,
            &Value::Array(categories),
            expected_requests,
        )
    }

    /// Create an endpoint responding with the given status and an empty body.
    pub fn create_status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
