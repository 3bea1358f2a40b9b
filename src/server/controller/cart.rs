use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cart::{CartListResponse, CartRequest, CartResponse},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, Permission},
        model::cart::{Cart, CreateCartParams, UpdateCartParams},
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// List carts visible to the caller.
///
/// Admins see every cart, everyone else sees only their own.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Carts ordered by ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/carts",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Successfully retrieved carts", body = CartListResponse),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_carts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let carts = if user.is_admin() {
        service.get_all().await?
    } else {
        service.get_by_user(user.id).await?
    };

    Ok((StatusCode::OK, Json(Cart::list_into_dto(carts))))
}

/// Get a cart by ID.
///
/// # Access Control
/// - `OwnerOrAdmin` - The cart's owner or an admin
///
/// # Returns
/// - `200 OK` - Cart with item names, prices and total
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the cart and is not an admin
/// - `404 Not Found` - No cart with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/carts/{cart_id}",
    tag = CART_TAG,
    params(
        ("cart_id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cart", body = CartResponse),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Cart not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_cart_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(cart_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CartService::new(&state.db);

    require_cart_owner(&state, &headers, &service, cart_id).await?;

    match service.get_by_id(cart_id).await? {
        Some(cart) => Ok((StatusCode::OK, Json(cart.into_dto()))),
        None => Err(cart_not_found(cart_id)),
    }
}

/// Create a cart for the authenticated user.
///
/// # Access Control
/// - Any authenticated user; the cart is always owned by the caller
///
/// # Returns
/// - `201 Created` - Created cart with item names, prices and total
/// - `400 Bad Request` - Invalid body, quantity below 1, or food listed twice
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - An item references an unknown food
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/carts",
    tag = CART_TAG,
    request_body = CartRequest,
    responses(
        (status = 201, description = "Successfully created cart", body = CartResponse),
        (status = 400, description = "Invalid cart data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<AppJson<CartRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = CartService::new(&state.db);

    let AppJson(payload) = payload?;
    let params = CreateCartParams::from_dto(user.id, payload)?;

    let cart = service.create(params).await?;

    tracing::info!("User {} created cart {}", user.id, cart.id);

    Ok((StatusCode::CREATED, Json(cart.into_dto())))
}

/// Replace a cart's items.
///
/// # Access Control
/// - `OwnerOrAdmin` - The cart's owner or an admin
///
/// # Returns
/// - `200 OK` - Updated cart
/// - `400 Bad Request` - Invalid body, quantity below 1, or food listed twice
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the cart and is not an admin
/// - `404 Not Found` - No cart with that ID, or an item references an unknown food
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/carts/{cart_id}",
    tag = CART_TAG,
    params(
        ("cart_id" = i32, Path, description = "Cart ID")
    ),
    request_body = CartRequest,
    responses(
        (status = 200, description = "Successfully updated cart", body = CartResponse),
        (status = 400, description = "Invalid cart data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Cart or food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(cart_id): AppPath<i32>,
    payload: Result<AppJson<CartRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let service = CartService::new(&state.db);

    require_cart_owner(&state, &headers, &service, cart_id).await?;

    let AppJson(payload) = payload?;
    let params = UpdateCartParams::from_dto(cart_id, payload)?;

    match service.update(params).await? {
        Some(cart) => Ok((StatusCode::OK, Json(cart.into_dto()))),
        None => Err(cart_not_found(cart_id)),
    }
}

/// Delete a cart and its items.
///
/// # Access Control
/// - `OwnerOrAdmin` - The cart's owner or an admin
///
/// # Returns
/// - `200 OK` - Cart deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the cart and is not an admin
/// - `404 Not Found` - No cart with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/carts/{cart_id}",
    tag = CART_TAG,
    params(
        ("cart_id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted cart"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Cart not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(cart_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CartService::new(&state.db);

    require_cart_owner(&state, &headers, &service, cart_id).await?;

    if service.delete(cart_id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(cart_not_found(cart_id))
    }
}

/// Authenticates the caller, then checks the cart exists and that they own it or are an admin.
async fn require_cart_owner(
    state: &AppState,
    headers: &HeaderMap,
    service: &CartService<'_>,
    cart_id: i32,
) -> Result<(), AppError> {
    let current = AuthGuard::new(&state.db, &state.jwt, headers)
        .require(&[])
        .await?;

    let Some(owner_id) = service.get_owner(cart_id).await? else {
        return Err(cart_not_found(cart_id));
    };

    AuthGuard::check(&current, &[Permission::OwnerOrAdmin(owner_id)])?;

    Ok(())
}

fn cart_not_found(cart_id: i32) -> AppError {
    AppError::NotFound(format!("Cart {} not found", cart_id))
}
