//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Starters";

/// Default test category position.
pub const DEFAULT_POSITION_ID: i64 = 1;

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - position_id: `1`
/// - name: `"Starters"`
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    position_id: i64,
    name: String,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            position_id: DEFAULT_POSITION_ID,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl CategoryEntityBuilder {
    /// Sets the category ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the menu position.
    pub fn position_id(mut self, position_id: i64) -> Self {
        self.position_id = position_id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and returns the category entity model.
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            position_id: self.position_id,
            name: self.name,
        }
    }
}
