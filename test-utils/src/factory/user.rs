//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in the password column of factory users.
///
/// It is not a valid Argon2 PHC string, so logging in as a factory user always
/// fails. Tests that need working credentials register through `UserService`.
pub const DEFAULT_PASSWORD_HASH: &str = "not-a-real-hash";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("chef@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password: String,
    address: String,
    phone_number: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - password: [`DEFAULT_PASSWORD_HASH`]
    /// - address: `"1 Test Street"`
    /// - phone_number: `"555-0100"`
    /// - role: `"USER"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            address: "1 Test Street".to_string(),
            phone_number: "555-0100".to_string(),
            role: "USER".to_string(),
        }
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored password hash for the user.
    pub fn password_hash(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Gives the user the `ADMIN` role when `admin` is true, `USER` otherwise.
    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin { "ADMIN" } else { "USER" }.to_string();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password: ActiveValue::Set(self.password),
            address: ActiveValue::Set(self.address),
            phone_number: ActiveValue::Set(self.phone_number),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the `ADMIN` role.
///
/// Shorthand for `UserFactory::new(db).admin(true).build().await`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
