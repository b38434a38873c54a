use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use petsupply::{
    model::category::CategoryDto,
    server::{model::app::PersistenceState, startup::persistence_app},
};
use petsupply_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::body_string;

fn app(test: &TestSetup) -> Router {
    persistence_app(test.state::<PersistenceState>())
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

mod create {
    use super::*;

    /// Expect 201 created with the new ID as body and location header
    #[tokio::test]
    async fn creates_category() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Category)?;

        let resp = app(&test)
            .oneshot(json_request(
                Method::POST,
                "/api/categories",
                json!({ "name": "Birds", "description": "Seeds and cages" }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let id: i32 = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(location, format!("/api/categories/{}", id));

        let resp = app(&test)
            .oneshot(empty_request(Method::GET, &location))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let category: CategoryDto = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(category.name, "Birds");
        assert_eq!(category.description, "Seeds and cages");

        Ok(())
    }

    /// Expect an ID sent in the body to be ignored
    #[tokio::test]
    async fn ignores_client_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(1).build().await?;
        let existing = test.categories()[0].id;

        let resp = app(&test)
            .oneshot(json_request(
                Method::POST,
                "/api/categories",
                json!({ "id": existing, "name": "Fish", "description": "Tanks" }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let id: i32 = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_ne!(id, existing);

        Ok(())
    }
}

mod list {
    use super::*;

    async fn list(test: &TestSetup, uri: &str) -> Vec<CategoryDto> {
        let resp = app(test)
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        serde_json::from_str(&body_string(resp).await).unwrap()
    }

    /// Expect min(max, total) categories starting at the first one
    #[tokio::test]
    async fn returns_min_of_max_and_total() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(3).build().await?;

        let page = list(&test, "/api/categories?start=0&max=2").await;
        assert_eq!(page.len(), 2);

        let page = list(&test, "/api/categories?start=0&max=10").await;
        assert_eq!(page.len(), 3);

        Ok(())
    }

    /// Expect the page to follow ID order after skipping `start` categories
    #[tokio::test]
    async fn pages_in_id_order() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(5).build().await?;
        let expected: Vec<CategoryDto> = test.categories()[1..3]
            .iter()
            .cloned()
            .map(CategoryDto::from)
            .collect();

        let page = list(&test, "/api/categories?start=1&max=2").await;

        assert_eq!(page, expected);

        Ok(())
    }

    /// Expect all categories without paging parameters
    #[tokio::test]
    async fn returns_all_without_params() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(4).build().await?;

        let page = list(&test, "/api/categories").await;

        assert_eq!(page.len(), 4);

        Ok(())
    }

    /// Expect an empty list without categories
    #[tokio::test]
    async fn returns_empty_list() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Category)?;

        let page = list(&test, "/api/categories?start=0&max=5").await;

        assert!(page.is_empty());

        Ok(())
    }
}

mod get {
    use super::*;

    /// Expect 404 for a nonexistent category
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Category)?;

        let resp = app(&test)
            .oneshot(empty_request(Method::GET, "/api/categories/7"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect 200 and the stored category to change
    #[tokio::test]
    async fn updates_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(1).build().await?;
        let id = test.categories()[0].id;
        let uri = format!("/api/categories/{}", id);

        let resp = app(&test)
            .oneshot(json_request(
                Method::PUT,
                &uri,
                json!({ "name": "Reptiles", "description": "Terrariums" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app(&test)
            .oneshot(empty_request(Method::GET, &uri))
            .await
            .unwrap();
        let category: CategoryDto = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(category.id, id);
        assert_eq!(category.name, "Reptiles");

        Ok(())
    }

    /// Expect 404 when updating a nonexistent category
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Category)?;

        let resp = app(&test)
            .oneshot(json_request(
                Method::PUT,
                "/api/categories/3",
                json!({ "name": "Reptiles", "description": "Terrariums" }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect 200 and the category to be gone afterwards
    #[tokio::test]
    async fn deletes_category() -> Result<(), TestError> {
        let test = TestBuilder::new().with_categories(2).build().await?;
        let uri = format!("/api/categories/{}", test.categories()[0].id);

        let resp = app(&test)
            .oneshot(empty_request(Method::DELETE, &uri))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app(&test)
            .oneshot(empty_request(Method::GET, &uri))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 when deleting a nonexistent category
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Category)?;

        let resp = app(&test)
            .oneshot(empty_request(Method::DELETE, "/api/categories/1"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

/// Expect the OpenAPI document to describe the category endpoints
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert!(doc["paths"].get("/api/categories").is_some());
    assert!(doc["paths"].get("/api/categories/{id}").is_some());

    Ok(())
}
