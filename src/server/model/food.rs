//! Food item domain model and parameters.

use crate::{
    model::food::{FoodListResponse, FoodRequest, FoodResponse, FoodUpdateRequest},
    server::{error::AppError, util::validate},
};

/// Orderable menu item belonging to one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: i32,
    pub category_id: i32,
    /// Display order, unique within the owning category.
    pub position_id: i64,
    pub name: String,
    pub price: f64,
}

impl Food {
    /// Converts an entity model to a food domain model at the repository boundary.
    pub fn from_entity(entity: entity::food::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            position_id: entity.position_id,
            name: entity.name,
            price: entity.price,
        }
    }

    /// Converts the food domain model to a DTO for API responses.
    pub fn into_dto(self) -> FoodResponse {
        FoodResponse {
            food_id: self.id,
            category_id: self.category_id,
            position_id: self.position_id,
            food_name: self.name,
            food_price: self.price,
        }
    }

    pub fn list_into_dto(foods: Vec<Self>) -> FoodListResponse {
        FoodListResponse {
            food_responses: foods.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Parameters for creating a food item inside a category.
#[derive(Debug, Clone)]
pub struct CreateFoodParams {
    pub category_id: i32,
    pub position_id: i64,
    pub name: String,
    pub price: f64,
}

impl CreateFoodParams {
    /// Validates the request body and converts it to creation parameters.
    ///
    /// # Arguments
    /// - `category_id` - Category taken from the request path
    /// - `dto` - Request body
    ///
    /// # Returns
    /// - `Ok(CreateFoodParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank name, position below 1, or a
    ///   negative or non-finite price
    pub fn from_dto(category_id: i32, dto: FoodRequest) -> Result<Self, AppError> {
        Ok(Self {
            category_id,
            position_id: validate::position("positionId", dto.position_id)?,
            name: validate::non_blank("foodName", dto.food_name)?,
            price: validate::price("foodPrice", dto.food_price)?,
        })
    }
}

/// Parameters for replacing a food item's fields, optionally moving it.
#[derive(Debug, Clone)]
pub struct UpdateFoodParams {
    pub id: i32,
    /// Category the item currently belongs to, from the request path.
    pub category_id: i32,
    /// Category the item belongs to after the update.
    pub target_category_id: i32,
    pub position_id: i64,
    pub name: String,
    pub price: f64,
}

impl UpdateFoodParams {
    /// When the body omits `categoryId` the item stays in its current category.
    pub fn from_dto(category_id: i32, id: i32, dto: FoodUpdateRequest) -> Result<Self, AppError> {
        Ok(Self {
            id,
            category_id,
            target_category_id: dto.category_id.unwrap_or(category_id),
            position_id: validate::position("positionId", dto.position_id)?,
            name: validate::non_blank("foodName", dto.food_name)?,
            price: validate::price("foodPrice", dto.food_price)?,
        })
    }
}
