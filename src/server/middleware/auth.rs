use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::Role,
    service::jwt::JwtService,
};

/// Scheme prefix of the `Authorization` header, including the separating space.
pub const TOKEN_PREFIX: &str = "Bearer ";
pub const TOKEN_PREFIX_LENGTH: usize = TOKEN_PREFIX.len();

pub enum Permission {
    /// Caller must hold the `ADMIN` role.
    Admin,
    /// Caller must be the given user or hold the `ADMIN` role.
    OwnerOrAdmin(i32),
}

/// Identity of the caller, as verified by [`AuthGuard::require`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Returns the raw token from an `Authorization: Bearer <token>` header.
///
/// # Returns
/// - `Ok(&str)` - Token with the fixed-length prefix stripped
/// - `Err(AuthError::MissingToken)` - Header absent, not UTF-8, wrong scheme or empty token
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    if !value.starts_with(TOKEN_PREFIX) || value.len() == TOKEN_PREFIX_LENGTH {
        return Err(AuthError::MissingToken);
    }

    Ok(&value[TOKEN_PREFIX_LENGTH..])
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the request and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - Token valid, not revoked, user exists, all permissions held
    /// - `Err(AuthError::MissingToken | InvalidToken | TokenRevoked | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403 for the first permission not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<CurrentUser, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.jwt.verify(token)?;

        if RevokedTokenRepository::new(self.db)
            .is_revoked(token)
            .await?
        {
            return Err(AuthError::TokenRevoked.into());
        }

        let user_id = claims.user_id()?;
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let current = CurrentUser {
            id: user.id,
            email: user.email,
            role: claims.role(),
        };

        Self::check(&current, permissions)?;

        Ok(current)
    }

    /// Checks permissions against an already authenticated caller.
    ///
    /// Used when the resource owner is only known after [`require`](Self::require)
    /// has run, so the token is verified once per request.
    ///
    /// # Returns
    /// - `Ok(())` - Every permission held
    /// - `Err(AuthError::AccessDenied)` - 403 for the first permission not held
    pub fn check(current: &CurrentUser, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !current.is_admin() {
                        return Err(AuthError::AccessDenied(
                            current.id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::OwnerOrAdmin(owner_id) => {
                    if current.id != *owner_id && !current.is_admin() {
                        return Err(AuthError::AccessDenied(
                            current.id,
                            format!(
                                "User attempted to access a resource owned by user {}",
                                owner_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}
