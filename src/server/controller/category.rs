use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryRequestDto},
    },
    server::{data::category::CategoryRepository, error::Error, model::app::PersistenceState},
};

pub static CATEGORY_TAG: &str = "category";

/// Paging of the category list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    /// Number of categories to skip, negative or absent starts at the first category
    pub start: Option<i64>,
    /// Maximum number of categories returned, negative or absent returns all
    pub max: Option<i64>,
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Category not found".to_string(),
        }),
    )
        .into_response()
}

/// Create a category
///
/// Responds with the ID of the created category, its location is set in the `Location` header.
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = i32),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<PersistenceState>,
    Json(category): Json<CategoryRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let repository = CategoryRepository::new(&state.db);

    let created = repository
        .create(category.name, category.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/categories/{}", created.id))],
        Json(created.id),
    ))
}

/// List categories in ID order
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    params(CategoryListParams),
    responses(
        (status = 200, description = "Page of categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<PersistenceState>,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, Error> {
    let repository = CategoryRepository::new(&state.db);

    let start = params.start.and_then(|start| u64::try_from(start).ok());
    let max = params.max.and_then(|max| u64::try_from(max).ok());

    let categories: Vec<CategoryDto> = repository
        .list(start, max)
        .await?
        .into_iter()
        .map(CategoryDto::from)
        .collect();

    Ok(Json(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<PersistenceState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let repository = CategoryRepository::new(&state.db);

    match repository.get(id).await? {
        Some(category) => Ok(Json(CategoryDto::from(category)).into_response()),
        None => Ok(not_found()),
    }
}

/// Update name and description of a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<PersistenceState>,
    Path(id): Path<i32>,
    Json(category): Json<CategoryRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let repository = CategoryRepository::new(&state.db);

    match repository
        .update(id, category.name, category.description)
        .await?
    {
        Some(category) => Ok(Json(CategoryDto::from(category)).into_response()),
        None => Ok(not_found()),
    }
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<PersistenceState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let repository = CategoryRepository::new(&state.db);

    let result = repository.delete(id).await?;

    if result.rows_affected == 0 {
        tracing::debug!("Attempted to delete nonexistent category {}", id);

        return Ok(not_found());
    }

    Ok(StatusCode::OK.into_response())
}
