use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryListResponse, CategoryRequest, CategoryResponse},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, Permission},
        model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all menu categories.
///
/// Returns every category ordered by position. Public.
///
/// # Returns
/// - `200 OK` - Ordered list of categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = CategoryListResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((StatusCode::OK, Json(Category::list_into_dto(categories))))
}

/// Get a category by ID.
///
/// # Returns
/// - `200 OK` - Category details
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    match service.get_by_id(category_id).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(category_not_found(category_id)),
    }
}

/// Create a new category.
///
/// Creates a category at the requested position. The position must not be held
/// by any other category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Category position and name
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Invalid body or position already taken
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryResponse),
        (status = 400, description = "Invalid category data or duplicate position", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<AppJson<CategoryRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let AppJson(payload) = payload?;
    let params = CreateCategoryParams::from_dto(payload)?;

    let category = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category.
///
/// Replaces the category's position and name. Keeping the current position is
/// always allowed.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
///
/// # Returns
/// - `200 OK` - Successfully updated category
/// - `400 Bad Request` - Invalid body or position held by another category
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryResponse),
        (status = 400, description = "Invalid category data or duplicate position", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(category_id): AppPath<i32>,
    payload: Result<AppJson<CategoryRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let AppJson(payload) = payload?;
    let params = UpdateCategoryParams::from_dto(category_id, payload)?;

    match service.update(params).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(category_not_found(category_id)),
    }
}

/// Delete a category and all of its food items.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
///
/// # Returns
/// - `200 OK` - Category deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No category with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted category"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(category_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    if service.delete(category_id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(category_not_found(category_id))
    }
}

fn category_not_found(category_id: i32) -> AppError {
    AppError::NotFound(format!("Category {} not found", category_id))
}
