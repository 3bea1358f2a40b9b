//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. Each token carries a
//! random `jti`, so two logins in the same second still produce distinct tokens
//! and revoking one does not revoke the other.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a decimal string.
    pub sub: String,
    pub email: String,
    /// `USER` or `ADMIN` at the time of issue.
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    /// Parses the user ID from `sub`.
    ///
    /// # Returns
    /// - `Ok(i32)` - The user ID
    /// - `Err(AuthError::InvalidToken)` - `sub` is not a number
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    pub fn role(&self) -> Role {
        Role::from_str_lossy(&self.role)
    }

    /// Expiry as a timestamp, used to bound how long a revocation is kept.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

/// Signs and verifies tokens. Cheap to clone.
#[derive(Clone)]
pub struct JwtService {
    keys: Arc<JwtKeys>,
}

impl JwtService {
    /// Builds the service from the shared secret and token lifetime.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret from `JWT_SECRET`
    /// - `expiration_minutes` - Token lifetime from `JWT_EXPIRATION_MINUTES`
    pub fn new(secret: &str, expiration_minutes: i64) -> Self {
        Self {
            keys: Arc::new(JwtKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation: Validation::default(),
                lifetime: Duration::minutes(expiration_minutes),
            }),
        }
    }

    /// Issues a signed token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT without the bearer prefix
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.keys.lifetime).timestamp(),
            jti: format!("{:016x}", OsRng.next_u64()),
        };

        Ok(encode(&Header::default(), &claims, &self.keys.encoding)?)
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered with, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                AuthError::InvalidToken
            })
    }
}
