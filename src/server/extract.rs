//! Request extractors.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::IntoResponse,
};
use serde::Serialize;

use crate::server::error::AppError;

/// JSON body extractor whose rejections become `AppError::BadRequest`.
///
/// Malformed JSON, a missing `Content-Type` and missing required fields all
/// produce a 400 with an `ErrorDto` body instead of axum's plain-text rejections.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T: Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor whose rejections become `AppError`.
///
/// Ids that are not integers are a 400. Integer ids outside the `i32` range
/// cannot name a stored row, so they are reported as 404 like any other
/// missing record.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
