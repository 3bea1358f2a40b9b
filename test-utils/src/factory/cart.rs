//! Cart factory for creating test carts and cart items.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty cart owned by the given user.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a food item with the given quantity to a cart.
pub async fn create_cart_item(
    db: &DatabaseConnection,
    cart_id: i32,
    food_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        cart_id: ActiveValue::Set(cart_id),
        food_id: ActiveValue::Set(food_id),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await
}
