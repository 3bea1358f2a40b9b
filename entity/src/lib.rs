//! SeaORM entity models for the restaurant database.

pub mod prelude;

pub mod cart;
pub mod cart_item;
pub mod category;
pub mod food;
pub mod revoked_token;
pub mod user;
