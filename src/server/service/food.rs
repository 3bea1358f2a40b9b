use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, food::FoodRepository},
    error::AppError,
    model::food::{CreateFoodParams, Food, UpdateFoodParams},
};

pub struct FoodService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoodService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a food item in an existing category at a free position.
    ///
    /// # Returns
    /// - `Ok(Food)` - The created food
    /// - `Err(AppError::NotFound)` - Category does not exist
    /// - `Err(AppError::Conflict)` - Another food in the category holds the position
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateFoodParams) -> Result<Food, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let food_repo = FoodRepository::new(self.db);

        if !category_repo.exists(params.category_id).await? {
            return Err(category_not_found(params.category_id));
        }

        if food_repo
            .position_taken(params.category_id, params.position_id, None)
            .await?
        {
            return Err(position_conflict(params.category_id, params.position_id));
        }

        let (category_id, position_id) = (params.category_id, params.position_id);
        food_repo
            .create(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, position_message(category_id, position_id)))
    }

    /// Gets a food item by ID within a category
    pub async fn get_by_id(&self, category_id: i32, id: i32) -> Result<Option<Food>, AppError> {
        let repo = FoodRepository::new(self.db);

        Ok(repo.get_by_id_in_category(category_id, id).await?)
    }

    /// Gets the food items of a category ordered by position.
    ///
    /// An unknown category has no food, so the result is simply empty.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Food>, AppError> {
        let repo = FoodRepository::new(self.db);

        Ok(repo.get_by_category(category_id).await?)
    }

    /// Replaces a food item's fields, optionally moving it to another category.
    ///
    /// # Returns
    /// - `Ok(Some(Food))` - The updated food
    /// - `Ok(None)` - The food does not exist under the path category
    /// - `Err(AppError::NotFound)` - The target category does not exist
    /// - `Err(AppError::Conflict)` - Another food in the target category holds the position
    pub async fn update(&self, params: UpdateFoodParams) -> Result<Option<Food>, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        let food_repo = FoodRepository::new(self.db);

        if !food_repo
            .exists_in_category(params.id, params.category_id)
            .await?
        {
            return Ok(None);
        }

        if params.target_category_id != params.category_id
            && !category_repo.exists(params.target_category_id).await?
        {
            return Err(category_not_found(params.target_category_id));
        }

        if food_repo
            .position_taken(params.target_category_id, params.position_id, Some(params.id))
            .await?
        {
            return Err(position_conflict(
                params.target_category_id,
                params.position_id,
            ));
        }

        let (category_id, position_id) = (params.target_category_id, params.position_id);
        let food = food_repo.update(params).await.map_err(|e| {
            AppError::from_db_conflict(e, position_message(category_id, position_id))
        })?;

        Ok(Some(food))
    }

    /// Deletes a food item
    /// Returns true if deleted, false if not found under that category
    pub async fn delete(&self, category_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = FoodRepository::new(self.db);

        if !repo.exists_in_category(id, category_id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

fn category_not_found(category_id: i32) -> AppError {
    AppError::NotFound(format!("Category {} not found", category_id))
}

fn position_message(category_id: i32, position_id: i64) -> String {
    format!(
        "Category {} already has food at position {}",
        category_id, position_id
    )
}

fn position_conflict(category_id: i32, position_id: i64) -> AppError {
    AppError::Conflict(position_message(category_id, position_id))
}
