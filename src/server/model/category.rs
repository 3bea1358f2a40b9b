//! Menu category domain model and parameters.

use crate::{
    model::category::{CategoryListResponse, CategoryRequest, CategoryResponse},
    server::{error::AppError, util::validate},
};

/// Menu section such as "Starters", ordered by `position_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    /// Display order, unique across all categories.
    pub position_id: i64,
    pub name: String,
}

impl Category {
    /// Converts an entity model to a category domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            position_id: entity.position_id,
            name: entity.name,
        }
    }

    /// Converts the category domain model to a DTO for API responses.
    pub fn into_dto(self) -> CategoryResponse {
        CategoryResponse {
            category_id: self.id,
            position_id: self.position_id,
            category_name: self.name,
        }
    }

    /// Wraps an ordered list of categories in the list response DTO.
    pub fn list_into_dto(categories: Vec<Self>) -> CategoryListResponse {
        CategoryListResponse {
            category_responses: categories.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub position_id: i64,
    pub name: String,
}

impl CreateCategoryParams {
    /// Validates the request body and converts it to creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCategoryParams)` - Trimmed name and a position of at least 1
    /// - `Err(AppError::BadRequest)` - Blank name or position below 1
    pub fn from_dto(dto: CategoryRequest) -> Result<Self, AppError> {
        Ok(Self {
            position_id: validate::position("positionId", dto.position_id)?,
            name: validate::non_blank("categoryName", dto.category_name)?,
        })
    }
}

/// Parameters for replacing a category's fields.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub position_id: i64,
    pub name: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: CategoryRequest) -> Result<Self, AppError> {
        let CreateCategoryParams { position_id, name } = CreateCategoryParams::from_dto(dto)?;

        Ok(Self {
            id,
            position_id,
            name,
        })
    }
}
