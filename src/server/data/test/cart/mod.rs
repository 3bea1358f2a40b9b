use crate::server::{
    data::cart::CartRepository,
    model::cart::{CartItemParams, CreateCartParams, UpdateCartParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod replace_items;

fn item(food_id: i32, quantity: i32) -> CartItemParams {
    CartItemParams { food_id, quantity }
}
