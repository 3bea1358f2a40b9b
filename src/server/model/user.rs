//! User domain models and parameters.
//!
//! Provides the account model, its role, and parameter types for registration,
//! profile updates, login and password changes. Password hashes never leave this
//! layer: `into_dto` drops them.

use crate::{
    model::user::{
        ChangePasswordRequest, LoginRequest, UserListResponse, UserRequest, UserResponse,
        UserUpdateRequest,
    },
    server::{error::AppError, util::validate},
};

/// Authorization role stored on every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Database and token representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses a stored role. Anything other than `ADMIN` is a regular user.
    pub fn from_str_lossy(value: &str) -> Self {
        if value == "ADMIN" {
            Self::Admin
        } else {
            Self::User
        }
    }
}

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Always lower-case.
    pub email: String,
    pub name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub address: String,
    pub phone_number: String,
    pub role: Role,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password,
            address: entity.address,
            phone_number: entity.phone_number,
            role: Role::from_str_lossy(&entity.role),
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserResponse` - Public profile fields without the password hash
    pub fn into_dto(self) -> UserResponse {
        UserResponse {
            user_id: self.id,
            email: self.email,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            role: self.role.as_str().to_string(),
        }
    }

    pub fn list_into_dto(users: Vec<Self>) -> UserListResponse {
        UserListResponse {
            user_responses: users.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Parameters for registering an account.
///
/// `password` is plaintext here; the service hashes it before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub address: String,
    pub phone_number: String,
}

impl CreateUserParams {
    /// Validates the registration body.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Lower-cased email and trimmed profile fields
    /// - `Err(AppError::BadRequest)` - Malformed email, blank field, or a password
    ///   shorter than the minimum length
    pub fn from_dto(dto: UserRequest) -> Result<Self, AppError> {
        validate::password("password", &dto.password)?;

        Ok(Self {
            email: validate::email(dto.email)?,
            name: validate::non_blank("name", dto.name)?,
            password: dto.password,
            address: validate::non_blank("address", dto.address)?,
            phone_number: validate::non_blank("phoneNumber", dto.phone_number)?,
        })
    }
}

/// Parameters for the stored insert; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub address: String,
    pub phone_number: String,
    pub role: Role,
}

/// Parameters for replacing a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UserUpdateRequest) -> Result<Self, AppError> {
        Ok(Self {
            id,
            email: validate::email(dto.email)?,
            name: validate::non_blank("name", dto.name)?,
            address: validate::non_blank("address", dto.address)?,
            phone_number: validate::non_blank("phoneNumber", dto.phone_number)?,
        })
    }
}

/// Login credentials with the email normalized.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    /// Only lower-cases the email; format problems surface as invalid credentials.
    pub fn from_dto(dto: LoginRequest) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

/// Parameters for changing the authenticated user's password.
#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub user_id: i32,
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(user_id: i32, dto: ChangePasswordRequest) -> Self {
        Self {
            user_id,
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}
