//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.

use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "diner@example.com";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test Diner";

/// Default stored password hash. Not a valid Argon2 string.
pub const DEFAULT_PASSWORD: &str = "not-a-real-hash";

/// Default test address.
pub const DEFAULT_ADDRESS: &str = "1 Test Street";

/// Default test phone number.
pub const DEFAULT_PHONE_NUMBER: &str = "555-0100";

/// Default role.
pub const DEFAULT_ROLE: &str = "USER";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"diner@example.com"`
/// - name: `"Test Diner"`
/// - role: `"USER"`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let admin = fixture::user::entity_builder()
///     .id(7)
///     .role("ADMIN")
///     .build();
/// ```
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: String,
    name: String,
    password: String,
    address: String,
    phone_number: String,
    role: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            email: DEFAULT_EMAIL.to_string(),
            name: DEFAULT_NAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role string, `USER` or `ADMIN`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            email: self.email,
            name: self.name,
            password: self.password,
            address: self.address,
            phone_number: self.phone_number,
            role: self.role,
        }
    }
}
