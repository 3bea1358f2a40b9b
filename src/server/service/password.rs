//! Argon2 password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes and verifies passwords with Argon2 default parameters.
pub struct PasswordService;

impl PasswordService {
    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC-format hash including algorithm, parameters and salt
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn hash(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// A stored value that is not a valid PHC string never matches.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match, or the stored hash is unreadable
    /// - `Err(AppError::InternalError)` - Verification failed for another reason
    pub fn verify(password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                return Ok(false);
            }
        };

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::InternalError(format!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }
}
