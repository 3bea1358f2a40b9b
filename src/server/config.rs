use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
/// One year.
const MAX_JWT_EXPIRATION_MINUTES: i64 = 525_600;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiration_minutes: i64,

    /// Credentials for the admin account created at startup when none exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiration_minutes = match std::env::var("JWT_EXPIRATION_MINUTES") {
            Ok(value) => parse_expiration_minutes(&value)?,
            Err(_) => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_minutes,
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

/// Token lifetime must be positive and at most [`MAX_JWT_EXPIRATION_MINUTES`].
fn parse_expiration_minutes(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| (1..=MAX_JWT_EXPIRATION_MINUTES).contains(minutes))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRATION_MINUTES".to_string(),
            reason: format!(
                "expected between 1 and {} minutes, got '{}'",
                MAX_JWT_EXPIRATION_MINUTES, value
            ),
        })
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank values are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
