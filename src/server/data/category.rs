//! Category data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, CreateCategoryParams, UpdateCategoryParams};

/// Repository providing database operations for menu categories.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new CategoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CategoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category with its generated ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `position_id`
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            position_id: ActiveValue::Set(params.position_id),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Gets a category by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - Category found
    /// - `Ok(None)` - No category with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets every category ordered by position.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::PositionId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Replaces a category's position and name.
    ///
    /// # Returns
    /// - `Ok(Category)` - The updated category
    /// - `Err(DbErr::RecordNotFound)` - No category with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, DbErr> {
        let category = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.position_id = ActiveValue::Set(params.position_id);
        active_model.name = ActiveValue::Set(params.name);

        let entity = active_model.update(self.db).await?;

        Ok(Category::from_entity(entity))
    }

    /// Deletes a category. Its food items are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a category other than `exclude_id` occupies `position_id`.
    ///
    /// # Arguments
    /// - `position_id` - Position to check
    /// - `exclude_id` - Category being updated, which may keep its own position
    ///
    /// # Returns
    /// - `Ok(true)` - Another category holds the position
    /// - `Ok(false)` - Position is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn position_taken(
        &self,
        position_id: i64,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Category::find()
            .filter(entity::category::Column::PositionId.eq(position_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
