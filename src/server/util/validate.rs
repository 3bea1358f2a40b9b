//! Field validation shared by the `from_dto` conversions.
//!
//! Every helper returns `AppError::BadRequest` naming the offending wire field.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid regex")
});

/// Trims the value and rejects it when nothing is left.
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(AppError::BadRequest)` - Value was empty or whitespace only
pub fn non_blank(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(trimmed.to_string())
}

/// Positions start at 1.
pub fn position(field: &str, value: i64) -> Result<i64, AppError> {
    if value < 1 {
        return Err(AppError::BadRequest(format!(
            "{} must be at least 1",
            field
        )));
    }

    Ok(value)
}

pub fn price(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::BadRequest(format!(
            "{} must be a non-negative number",
            field
        )));
    }

    Ok(value)
}

pub fn quantity(field: &str, value: i32) -> Result<i32, AppError> {
    if value < 1 {
        return Err(AppError::BadRequest(format!(
            "{} must be at least 1",
            field
        )));
    }

    Ok(value)
}

/// Lower-cases and format-checks an email address.
///
/// # Returns
/// - `Ok(String)` - Trimmed, lower-cased email
/// - `Err(AppError::BadRequest)` - Blank or malformed email
pub fn email(value: String) -> Result<String, AppError> {
    let email = non_blank("email", value)?.to_lowercase();
    if !EMAIL_REGEX.is_match(&email) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    Ok(email)
}

/// Passwords are not trimmed; whitespace is part of the secret.
pub fn password(field: &str, value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters",
            field, MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
