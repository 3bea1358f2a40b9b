//! Food factory for creating test food entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test food items with customizable fields.
///
/// The category must already exist; use
/// [`create_food_with_category`](crate::factory::helpers::create_food_with_category)
/// to create both at once.
pub struct FoodFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    position_id: i64,
    name: String,
    price: f64,
}

impl<'a> FoodFactory<'a> {
    /// Creates a new FoodFactory with default values.
    ///
    /// Defaults:
    /// - position_id: a unique auto-incremented value
    /// - name: `"Food {id}"`
    /// - price: `9.5`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            position_id: id as i64,
            name: format!("Food {}", id),
            price: 9.5,
        }
    }

    /// Sets the position id for the food.
    pub fn position_id(mut self, position_id: i64) -> Self {
        self.position_id = position_id;
        self
    }

    /// Sets the name for the food.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price for the food.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the food entity into the database.
    pub async fn build(self) -> Result<entity::food::Model, DbErr> {
        entity::food::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            position_id: ActiveValue::Set(self.position_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a food item with default values in the given category.
pub async fn create_food(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::food::Model, DbErr> {
    FoodFactory::new(db, category_id).build().await
}

/// Creates a food item at a specific position in the given category.
pub async fn create_food_at(
    db: &DatabaseConnection,
    category_id: i32,
    position_id: i64,
) -> Result<entity::food::Model, DbErr> {
    FoodFactory::new(db, category_id)
        .position_id(position_id)
        .build()
        .await
}
