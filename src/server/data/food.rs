//! Food data repository for database operations.
//!
//! Food items are always addressed through their category, so most lookups take
//! both IDs and treat a food under the wrong category as missing.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::food::{CreateFoodParams, Food, UpdateFoodParams};

/// Repository providing database operations for food items.
pub struct FoodRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoodRepository<'a> {
    /// Creates a new FoodRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FoodRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new food item.
    ///
    /// # Returns
    /// - `Ok(Food)` - The created food with its generated ID
    /// - `Err(DbErr)` - Database error, including foreign key or unique violations
    pub async fn create(&self, params: CreateFoodParams) -> Result<Food, DbErr> {
        let entity = entity::food::ActiveModel {
            category_id: ActiveValue::Set(params.category_id),
            position_id: ActiveValue::Set(params.position_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Food::from_entity(entity))
    }

    /// Gets a food item by ID, only if it belongs to the given category.
    ///
    /// # Returns
    /// - `Ok(Some(Food))` - Food found in that category
    /// - `Ok(None)` - No such food, or it belongs to another category
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id_in_category(
        &self,
        category_id: i32,
        id: i32,
    ) -> Result<Option<Food>, DbErr> {
        let entity = entity::prelude::Food::find_by_id(id)
            .filter(entity::food::Column::CategoryId.eq(category_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Food::from_entity))
    }

    /// Gets every food in a category ordered by position.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Food>, DbErr> {
        let entities = entity::prelude::Food::find()
            .filter(entity::food::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::food::Column::PositionId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Food::from_entity).collect())
    }

    /// Gets the food items with the given IDs, in no particular order.
    ///
    /// IDs without a matching row are silently absent from the result.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Food>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Food::find()
            .filter(entity::food::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Food::from_entity).collect())
    }

    /// Replaces a food item's fields, moving it to `target_category_id`.
    ///
    /// # Returns
    /// - `Ok(Food)` - The updated food
    /// - `Err(DbErr::RecordNotFound)` - No food with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateFoodParams) -> Result<Food, DbErr> {
        let food = entity::prelude::Food::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Food with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::food::ActiveModel = food.into();
        active_model.category_id = ActiveValue::Set(params.target_category_id);
        active_model.position_id = ActiveValue::Set(params.position_id);
        active_model.name = ActiveValue::Set(params.name);
        active_model.price = ActiveValue::Set(params.price);

        let entity = active_model.update(self.db).await?;

        Ok(Food::from_entity(entity))
    }

    /// Deletes a food item. Cart lines referencing it are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Food::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn exists_in_category(&self, id: i32, category_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Food::find_by_id(id)
            .filter(entity::food::Column::CategoryId.eq(category_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a food other than `exclude_id` occupies `position_id` in a category.
    ///
    /// # Arguments
    /// - `category_id` - Category whose positions are checked
    /// - `position_id` - Position to check
    /// - `exclude_id` - Food being updated or moved, which may keep its own position
    pub async fn position_taken(
        &self,
        category_id: i32,
        position_id: i64,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Food::find()
            .filter(entity::food::Column::CategoryId.eq(category_id))
            .filter(entity::food::Column::PositionId.eq(position_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::food::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
