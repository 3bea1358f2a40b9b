use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category at a free position.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(AppError::Conflict)` - Another category already holds the position
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.position_taken(params.position_id, None).await? {
            return Err(position_conflict(params.position_id));
        }

        let position_id = params.position_id;
        repo.create(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, position_message(position_id)))
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets all categories ordered by position
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Replaces a category's position and name.
    /// Returns None if the category doesn't exist
    ///
    /// A category may keep its own position; only a different category holding the
    /// target position is a conflict.
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        if repo
            .position_taken(params.position_id, Some(params.id))
            .await?
        {
            return Err(position_conflict(params.position_id));
        }

        let position_id = params.position_id;
        let category = repo
            .update(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, position_message(position_id)))?;

        Ok(Some(category))
    }

    /// Deletes a category and, through the cascade, its food items
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

fn position_message(position_id: i64) -> String {
    format!("A category already exists at position {}", position_id)
}

fn position_conflict(position_id: i64) -> AppError {
    AppError::Conflict(position_message(position_id))
}
