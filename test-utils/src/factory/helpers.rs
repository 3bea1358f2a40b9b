//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for unique emails, names and position ids so factories can be called
/// repeatedly within one database without tripping unique constraints.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category with one food item in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, food))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_food_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::food::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let food = crate::factory::food::create_food(db, category.id).await?;

    Ok((category, food))
}

/// Creates a user owning a cart that holds one food item.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, food, cart))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cart_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::food::Model,
        entity::cart::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (_, food) = create_food_with_category(db).await?;
    let cart = crate::factory::cart::create_cart(db, user.id).await?;
    crate::factory::cart::create_cart_item(db, cart.id, food.id, 1).await?;

    Ok((user, food, cart))
}
