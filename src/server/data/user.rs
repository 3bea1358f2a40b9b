//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and admin checks with conversion from
//! entity models to domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{NewUserRecord, Role, UpdateUserParams, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with an already hashed password.
    ///
    /// # Arguments
    /// - `record` - Normalized fields, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, record: NewUserRecord) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(record.email),
            name: ActiveValue::Set(record.name),
            password: ActiveValue::Set(record.password_hash),
            address: ActiveValue::Set(record.address),
            phone_number: ActiveValue::Set(record.phone_number),
            role: ActiveValue::Set(record.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email. The caller passes an already lower-cased email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Replaces a user's profile fields. Password and role are left unchanged.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.email = ActiveValue::Set(params.email);
        active_model.name = ActiveValue::Set(params.name);
        active_model.address = ActiveValue::Set(params.address);
        active_model.phone_number = ActiveValue::Set(params.phone_number);

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Stores a new password hash for a user.
    ///
    /// # Returns
    /// - `Ok(())` - Hash updated
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.password = ActiveValue::Set(password_hash);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user. Their carts are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether a user other than `exclude_id` is registered with `email`.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the configured admin account needs creating.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
