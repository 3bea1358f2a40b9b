use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one without the `Bearer ` prefix.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("Bearer token failed verification")]
    InvalidToken,

    /// Token was presented after logout.
    #[error("Bearer token has been revoked")]
    TokenRevoked,

    /// Unknown email or wrong password at login.
    ///
    /// Both cases share one variant so the response does not reveal which
    /// emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token is valid but names a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the required permission.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the check that failed, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid, or revoked tokens, bad credentials, unknown users
/// - 403 Forbidden - Authenticated user without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to access this resource".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken
            | Self::InvalidToken
            | Self::TokenRevoked
            | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
