use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    data::revoked_token::RevokedTokenRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::user::{Role, User},
    service::jwt::JwtService,
};
use test_utils::{builder::TestBuilder, factory};

mod check;
mod parse_header;
mod require;

fn jwt() -> JwtService {
    JwtService::new("test-secret", 60)
}

/// Headers carrying `Authorization: Bearer <token>`.
fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Issues a token for a factory-created user.
fn token_for(jwt: &JwtService, user: entity::user::Model) -> String {
    jwt.issue(&User::from_entity(user)).unwrap()
}

fn assert_auth_error(result: Result<impl std::fmt::Debug, AppError>, check: fn(&AuthError) -> bool) {
    match result {
        Err(AppError::AuthErr(ref err)) if check(err) => {}
        other => panic!("Unexpected result: {:?}", other),
    }
}
