//! HTTP routing of both services.
//!
//! The persistence service registers its endpoints through utoipa's `OpenApiRouter`, which
//! collects the OpenAPI document served at `/api/docs/openapi.json`. The web UI routes are
//! plain axum routes, every page answers GET and POST alike.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller,
    model::app::{PersistenceState, WebUiState},
};

/// Builds the router of the persistence service.
///
/// # Registered Endpoints
/// - `POST /api/categories` - Create a category
/// - `GET /api/categories` - List categories, paged with `start` & `max`
/// - `GET /api/categories/{id}` - Get a category
/// - `PUT /api/categories/{id}` - Update a category
/// - `DELETE /api/categories/{id}` - Delete a category
/// - `GET /api/docs/openapi.json` - OpenAPI document of the above
pub fn persistence_routes() -> Router<PersistenceState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Pet Supply Store Persistence", description = "Pet supply store persistence API"),
        tags((name = controller::category::CATEGORY_TAG, description = "Category CRUD API routes"))
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::category::create_category,
            controller::category::list_categories
        ))
        .routes(routes!(
            controller::category::get_category,
            controller::category::update_category,
            controller::category::delete_category
        ))
        .split_for_parts();

    routes.route("/api/docs/openapi.json", get(move || async move { Json(api) }))
}

/// Builds the router of the web UI, with every page below `context_path`.
///
/// The home page answers both `{context_path}` and `{context_path}/`.
pub fn webui_routes(context_path: &str) -> Router<WebUiState> {
    let path = |page: &str| format!("{}{}", context_path, page);

    let router = Router::new()
        .route(
            &path("/"),
            get(controller::page::index).post(controller::page::index),
        )
        .route(
            &path("/login"),
            get(controller::page::login).post(controller::page::login),
        )
        .route(
            &path("/cart"),
            get(controller::page::cart).post(controller::page::cart),
        )
        .route(
            &path("/loginAction"),
            get(controller::login::login_action).post(controller::login::login_action_post),
        );

    if context_path.is_empty() {
        return router;
    }

    router.route(
        context_path,
        get(controller::page::index).post(controller::page::index),
    )
}
