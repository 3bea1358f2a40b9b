//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 400 Bad Request through the
    /// `Conflict` mapping; everything else is a 500 with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token signing failure from jsonwebtoken.
    ///
    /// Verification failures are reported as `AuthError::InvalidToken` instead, so
    /// this variant only covers server-side problems and results in 500.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// I/O failure while binding or serving the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate positional slot or email.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts malformed or incomplete JSON bodies into 400 Bad Request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts unparsable path parameters into 400 Bad Request, or 404 Not Found
/// when the value is an integer too large for an id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let value = match &rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::ParseErrorAtKey { value, .. }
                | ErrorKind::ParseErrorAtIndex { value, .. }
                | ErrorKind::ParseError { value, .. } => Some(value.clone()),
                _ => None,
            },
            _ => None,
        };

        match value {
            Some(value) if value.parse::<i128>().is_ok() => {
                AppError::NotFound(format!("Resource {} not found", value))
            }
            _ => AppError::BadRequest(rejection.body_text()),
        }
    }
}

impl AppError {
    /// Maps a database error to `Conflict` when it is a unique constraint violation.
    ///
    /// Services check uniqueness before writing; this covers a concurrent writer
    /// slipping past that check.
    pub fn from_db_conflict(err: sea_orm::DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.into()),
            _ => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Conflict` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, JwtErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) | Self::Conflict(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
