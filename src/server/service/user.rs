//! User service for business logic.
//!
//! This module provides the `UserService` for account management: registration,
//! login and logout, password changes and profile administration. It works with
//! domain models rather than DTOs and never exposes password hashes.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{revoked_token::RevokedTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{
        ChangePasswordParams, CreateUserParams, LoginParams, NewUserRecord, Role,
        UpdateUserParams, User,
    },
    service::{jwt::JwtService, password::PasswordService},
    util::validate,
};

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for account lifecycle, credential checks and user queries.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields with a plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with role `USER`
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        self.create_with_role(params, Role::User).await
    }

    /// Registers an admin. Used by the startup bootstrap only.
    pub async fn register_admin(&self, params: CreateUserParams) -> Result<User, AppError> {
        let params = CreateUserParams {
            email: validate::email(params.email)?,
            ..params
        };
        validate::password("ADMIN_PASSWORD", &params.password)?;

        self.create_with_role(params, Role::Admin).await
    }

    async fn create_with_role(&self, params: CreateUserParams, role: Role) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_taken(&params.email, None).await? {
            return Err(email_conflict(&params.email));
        }

        let password_hash = PasswordService::hash(&params.password)?;
        let email = params.email.clone();

        repo.create(NewUserRecord {
            email: params.email,
            name: params.name,
            password_hash,
            address: params.address,
            phone_number: params.phone_number,
            role,
        })
        .await
        .map_err(|e| AppError::from_db_conflict(e, email_message(&email)))
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed JWT
    /// - `Err(AuthError::InvalidCredentials)` - Email unknown or password wrong
    pub async fn login(&self, params: LoginParams, jwt: &JwtService) -> Result<String, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !PasswordService::verify(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.id);

        jwt.issue(&user)
    }

    /// Revokes a token until its expiry and purges revocations that have lapsed.
    ///
    /// # Arguments
    /// - `token` - Raw JWT with the bearer prefix already stripped
    /// - `jwt` - Token service used to validate the token before revoking it
    ///
    /// # Returns
    /// - `Ok(())` - Token revoked
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    pub async fn logout(&self, token: &str, jwt: &JwtService) -> Result<(), AppError> {
        let claims = jwt.verify(token)?;
        let repo = RevokedTokenRepository::new(self.db);

        repo.revoke(token, claims.expires_at()).await?;

        let purged = repo.purge_expired(Utc::now()).await?;
        if purged > 0 {
            tracing::debug!("Purged {} expired revoked tokens", purged);
        }

        Ok(())
    }

    /// Changes a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - User missing, current password wrong, new
    ///   password identical to the current one or too short
    pub async fn change_password(&self, params: ChangePasswordParams) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(params.user_id).await? else {
            return Err(AppError::BadRequest(format!(
                "User {} does not exist",
                params.user_id
            )));
        };

        if !PasswordService::verify(&params.current_password, &user.password_hash)? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        if params.new_password == params.current_password {
            return Err(AppError::BadRequest(
                "New password must differ from the current password".to_string(),
            ));
        }

        validate::password("newPassword", &params.new_password)?;

        let password_hash = PasswordService::hash(&params.new_password)?;
        repo.update_password(user.id, password_hash).await?;

        tracing::info!("User {} changed their password", user.id);

        Ok(())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Retrieves all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Replaces a user's profile fields.
    /// Returns None if the user doesn't exist
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - The new email belongs to another user
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        if repo.email_taken(&params.email, Some(params.id)).await? {
            return Err(email_conflict(&params.email));
        }

        let email = params.email.clone();
        let user = repo
            .update(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, email_message(&email)))?;

        Ok(Some(user))
    }

    /// Deletes a user and, through the cascade, their carts
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Checks whether any account holds the `ADMIN` role.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.admin_exists().await?)
    }
}

fn email_message(email: &str) -> String {
    format!("Email {} is already registered", email)
}

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(email_message(email))
}
