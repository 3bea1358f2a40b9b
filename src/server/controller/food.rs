use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        food::{FoodListResponse, FoodRequest, FoodResponse, FoodUpdateRequest},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, Permission},
        model::food::{CreateFoodParams, Food, UpdateFoodParams},
        service::food::FoodService,
        state::AppState,
    },
};

/// Tag for grouping food endpoints in OpenAPI documentation
pub static FOOD_TAG: &str = "food";

/// List the food items of a category.
///
/// Returns the category's food ordered by position. An unknown category yields
/// an empty list. Public.
///
/// # Returns
/// - `200 OK` - Ordered list of food items
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{category_id}/food",
    tag = FOOD_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved food items", body = FoodListResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FoodService::new(&state.db);

    let foods = service.get_by_category(category_id).await?;

    Ok((StatusCode::OK, Json(Food::list_into_dto(foods))))
}

/// Get a food item within a category.
///
/// # Returns
/// - `200 OK` - Food details
/// - `404 Not Found` - No such food under that category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{category_id}/food/{food_id}",
    tag = FOOD_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("food_id" = i32, Path, description = "Food ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved food", body = FoodResponse),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_by_id(
    State(state): State<AppState>,
    AppPath((category_id, food_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = FoodService::new(&state.db);

    match service.get_by_id(category_id, food_id).await? {
        Some(food) => Ok((StatusCode::OK, Json(food.into_dto()))),
        None => Err(food_not_found(category_id, food_id)),
    }
}

/// Create a food item in a category.
///
/// # Access Control
/// - `Admin` - Only admins can create food items
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `category_id` - Category the food is added to
/// - `payload` - Food position, name and price
///
/// # Returns
/// - `201 Created` - Successfully created food
/// - `400 Bad Request` - Invalid body or position already taken in the category
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/categories/{category_id}/food",
    tag = FOOD_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    request_body = FoodRequest,
    responses(
        (status = 201, description = "Successfully created food", body = FoodResponse),
        (status = 400, description = "Invalid food data or duplicate position", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(category_id): AppPath<i32>,
    payload: Result<AppJson<FoodRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = FoodService::new(&state.db);

    let AppJson(payload) = payload?;
    let params = CreateFoodParams::from_dto(category_id, payload)?;

    let food = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(food.into_dto())))
}

/// Update a food item, optionally moving it to another category.
///
/// # Access Control
/// - `Admin` - Only admins can update food items
///
/// # Returns
/// - `200 OK` - Successfully updated food
/// - `400 Bad Request` - Invalid body or position held by another food
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Food not under that category, or target category missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/categories/{category_id}/food/{food_id}",
    tag = FOOD_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("food_id" = i32, Path, description = "Food ID")
    ),
    request_body = FoodUpdateRequest,
    responses(
        (status = 200, description = "Successfully updated food", body = FoodResponse),
        (status = 400, description = "Invalid food data or duplicate position", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Food or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath((category_id, food_id)): AppPath<(i32, i32)>,
    payload: Result<AppJson<FoodUpdateRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = FoodService::new(&state.db);

    let AppJson(payload) = payload?;
    let params = UpdateFoodParams::from_dto(category_id, food_id, payload)?;

    match service.update(params).await? {
        Some(food) => Ok((StatusCode::OK, Json(food.into_dto()))),
        None => Err(food_not_found(category_id, food_id)),
    }
}

/// Delete a food item.
///
/// # Access Control
/// - `Admin` - Only admins can delete food items
///
/// # Returns
/// - `200 OK` - Food deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such food under that category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/categories/{category_id}/food/{food_id}",
    tag = FOOD_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("food_id" = i32, Path, description = "Food ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted food"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath((category_id, food_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = FoodService::new(&state.db);

    if service.delete(category_id, food_id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(food_not_found(category_id, food_id))
    }
}

fn food_not_found(category_id: i32, food_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Food {} not found in category {}",
        food_id, category_id
    ))
}
