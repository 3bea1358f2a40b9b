//! Cart service for business logic.
//!
//! Checks that every requested food exists before any write, so a cart is never
//! partially created or partially replaced.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, food::FoodRepository},
    error::AppError,
    model::cart::{Cart, CartItemParams, CreateCartParams, UpdateCartParams},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a cart for a user.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The created cart with item names, prices and total
    /// - `Err(AppError::NotFound)` - An item references an unknown food
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCartParams) -> Result<Cart, AppError> {
        self.ensure_foods_exist(&params.items).await?;

        let repo = CartRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets a cart by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cart>, AppError> {
        let repo = CartRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets every cart, for admins
    pub async fn get_all(&self) -> Result<Vec<Cart>, AppError> {
        let repo = CartRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the carts owned by a user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Cart>, AppError> {
        let repo = CartRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Returns the owner of a cart, or None if the cart doesn't exist
    pub async fn get_owner(&self, id: i32) -> Result<Option<i32>, AppError> {
        let repo = CartRepository::new(self.db);

        Ok(repo.find_owner(id).await?)
    }

    /// Replaces a cart's items.
    /// Returns None if the cart doesn't exist
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - An item references an unknown food
    pub async fn update(&self, params: UpdateCartParams) -> Result<Option<Cart>, AppError> {
        let repo = CartRepository::new(self.db);

        if repo.find_owner(params.id).await?.is_none() {
            return Ok(None);
        }

        self.ensure_foods_exist(&params.items).await?;

        Ok(Some(repo.replace_items(params).await?))
    }

    /// Deletes a cart
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CartRepository::new(self.db);

        if repo.find_owner(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Fails with `NotFound` naming the first requested food that does not exist.
    async fn ensure_foods_exist(&self, items: &[CartItemParams]) -> Result<(), AppError> {
        let food_repo = FoodRepository::new(self.db);

        let ids: Vec<i32> = items.iter().map(|item| item.food_id).collect();
        let found: HashSet<i32> = food_repo
            .get_by_ids(&ids)
            .await?
            .into_iter()
            .map(|food| food.id)
            .collect();

        if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
            tracing::warn!("Cart references unknown food {}", missing);
            return Err(AppError::NotFound(format!("Food {} not found", missing)));
        }

        Ok(())
    }
}
