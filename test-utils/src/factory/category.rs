//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .position_id(1)
///     .name("Starters")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    position_id: i64,
    name: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - position_id: a unique auto-incremented value
    /// - name: `"Category {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            position_id: id as i64,
            name: format!("Category {}", id),
        }
    }

    /// Sets the position id for the category.
    pub fn position_id(mut self, position_id: i64) -> Self {
        self.position_id = position_id;
        self
    }

    /// Sets the name for the category.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            position_id: ActiveValue::Set(self.position_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates a category at a specific position.
pub async fn create_category_at(
    db: &DatabaseConnection,
    position_id: i64,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).position_id(position_id).build().await
}
