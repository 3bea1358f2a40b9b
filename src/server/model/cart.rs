//! Cart domain models and parameters.

use std::collections::HashSet;

use crate::{
    model::cart::{CartItemResponse, CartListResponse, CartRequest, CartResponse},
    server::{error::AppError, util::validate},
};

/// One food line in a cart, joined with the food's current name and price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub food_id: i32,
    pub food_name: String,
    pub food_price: f64,
    pub quantity: i32,
}

impl CartLine {
    /// Builds a line from a cart item row and the food it references.
    pub fn from_entity(item: entity::cart_item::Model, food: entity::food::Model) -> Self {
        Self {
            food_id: item.food_id,
            food_name: food.name,
            food_price: food.price,
            quantity: item.quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.food_price * self.quantity as f64
    }

    pub fn into_dto(self) -> CartItemResponse {
        CartItemResponse {
            food_id: self.food_id,
            food_name: self.food_name,
            food_price: self.food_price,
            quantity: self.quantity,
        }
    }
}

/// Shopping cart owned by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: i32,
    pub user_id: i32,
    /// Lines ordered by cart item id, which is insertion order.
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn from_entity(entity: entity::cart::Model, items: Vec<CartLine>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            items,
        }
    }

    /// Sum of price times quantity over every line.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLine::subtotal).sum()
    }

    /// Converts the cart domain model to a DTO for API responses.
    pub fn into_dto(self) -> CartResponse {
        let total = self.total();

        CartResponse {
            cart_id: self.id,
            user_id: self.user_id,
            items: self.items.into_iter().map(CartLine::into_dto).collect(),
            total,
        }
    }

    pub fn list_into_dto(carts: Vec<Self>) -> CartListResponse {
        CartListResponse {
            cart_responses: carts.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Requested food and quantity, before the food is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemParams {
    pub food_id: i32,
    pub quantity: i32,
}

/// Validates request items: every quantity at least 1, no food listed twice.
fn items_from_dto(dto: CartRequest) -> Result<Vec<CartItemParams>, AppError> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(dto.items.len());

    for item in dto.items {
        if !seen.insert(item.food_id) {
            return Err(AppError::BadRequest(format!(
                "Food {} is listed more than once",
                item.food_id
            )));
        }

        items.push(CartItemParams {
            food_id: item.food_id,
            quantity: validate::quantity("quantity", item.quantity)?,
        });
    }

    Ok(items)
}

/// Parameters for creating a cart for the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateCartParams {
    pub user_id: i32,
    pub items: Vec<CartItemParams>,
}

impl CreateCartParams {
    /// # Returns
    /// - `Ok(CreateCartParams)` - Items with distinct foods and positive quantities
    /// - `Err(AppError::BadRequest)` - Duplicate food or quantity below 1
    pub fn from_dto(user_id: i32, dto: CartRequest) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            items: items_from_dto(dto)?,
        })
    }
}

/// Parameters for replacing a cart's items.
#[derive(Debug, Clone)]
pub struct UpdateCartParams {
    pub id: i32,
    pub items: Vec<CartItemParams>,
}

impl UpdateCartParams {
    pub fn from_dto(id: i32, dto: CartRequest) -> Result<Self, AppError> {
        Ok(Self {
            id,
            items: items_from_dto(dto)?,
        })
    }
}
