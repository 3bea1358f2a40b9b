//! Food fixtures for creating in-memory test data.

use entity::food;

/// Default test food name.
pub const DEFAULT_NAME: &str = "Garlic Bread";

/// Default test food price.
pub const DEFAULT_PRICE: f64 = 4.5;

/// Creates a food entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - category_id: `1`
/// - position_id: `1`
/// - name: `"Garlic Bread"`
/// - price: `4.5`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let food = fixture::food::entity();
/// assert_eq!(food.price, 4.5);
/// ```
pub fn entity() -> food::Model {
    entity_builder().build()
}

/// Creates a food entity builder for customization.
pub fn entity_builder() -> FoodEntityBuilder {
    FoodEntityBuilder::default()
}

/// Builder for creating customized food entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct FoodEntityBuilder {
    id: i32,
    category_id: i32,
    position_id: i64,
    name: String,
    price: f64,
}

impl Default for FoodEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            category_id: 1,
            position_id: 1,
            name: DEFAULT_NAME.to_string(),
            price: DEFAULT_PRICE,
        }
    }
}

impl FoodEntityBuilder {
    /// Sets the food ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning category ID.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the position within the category.
    pub fn position_id(mut self, position_id: i64) -> Self {
        self.position_id = position_id;
        self
    }

    /// Sets the food name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and returns the food entity model.
    pub fn build(self) -> food::Model {
        food::Model {
            id: self.id,
            category_id: self.category_id,
            position_id: self.position_id,
            name: self.name,
            price: self.price,
        }
    }
}
