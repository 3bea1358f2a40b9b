use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            ChangePasswordRequest, LoginRequest, TokenResponse, UserListResponse, UserRequest,
            UserResponse, UserUpdateRequest,
        },
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{bearer_token, AuthGuard, Permission},
        model::user::{
            ChangePasswordParams, CreateUserParams, LoginParams, UpdateUserParams, User,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// Lower-cases the email, checks its format and uniqueness, hashes the password
/// and creates the account with role `USER`.
///
/// # Returns
/// - `201 Created` - Registered user without password
/// - `400 Bad Request` - Invalid body, malformed email, short password, or email taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/register",
    tag = USER_TAG,
    request_body = UserRequest,
    responses(
        (status = 201, description = "Successfully registered user", body = UserResponse),
        (status = 400, description = "Invalid registration data or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = CreateUserParams::from_dto(payload)?;

    let user = service.register(params).await?;

    tracing::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in and receive a bearer token.
///
/// # Returns
/// - `200 OK` - Signed token
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/users/login",
    tag = USER_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenResponse),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let token = service
        .login(LoginParams::from_dto(payload), &state.jwt)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
        }),
    ))
}

/// Log out by revoking the presented bearer token.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Missing, invalid, or already revoked token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully logged out"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    service.logout(bearer_token(&headers)?, &state.jwt).await?;

    tracing::info!("User {} logged out", user.id);

    Ok(StatusCode::OK)
}

/// Change the authenticated user's password.
///
/// # Access Control
/// - Any authenticated user, for their own account
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Wrong current password, unchanged or too short new password
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/users/password",
    tag = USER_TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Successfully changed password"),
        (status = 400, description = "Password change rejected", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<AppJson<ChangePasswordRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    let AppJson(payload) = payload?;
    service
        .change_password(ChangePasswordParams::from_dto(user.id, payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Get the authenticated user's profile.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved current user", body = UserResponse),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    match service.get_by_id(current.id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(user_not_found(current.id)),
    }
}

/// List all users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Users ordered by ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UserListResponse),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    Ok((StatusCode::OK, Json(User::list_into_dto(users))))
}

/// Get a user by ID.
///
/// Existence is checked before ownership, so a missing user is 404 for every caller.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
///
/// # Returns
/// - `200 OK` - User details
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserResponse),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    let Some(user) = service.get_by_id(user_id).await? else {
        return Err(user_not_found(user_id));
    };

    AuthGuard::check(&current, &[Permission::OwnerOrAdmin(user_id)])?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's profile.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid body or email held by another user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UserUpdateRequest,
    responses(
        (status = 200, description = "Successfully updated user", body = UserResponse),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(user_id): AppPath<i32>,
    payload: Result<AppJson<UserUpdateRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db);

    if service.get_by_id(user_id).await?.is_none() {
        return Err(user_not_found(user_id));
    }

    AuthGuard::check(&current, &[Permission::OwnerOrAdmin(user_id)])?;

    let AppJson(payload) = payload?;
    let params = UpdateUserParams::from_dto(user_id, payload)?;

    match service.update(params).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(user_not_found(user_id)),
    }
}

/// Delete a user and their carts.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - User deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    if service.delete(user_id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(user_not_found(user_id))
    }
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
