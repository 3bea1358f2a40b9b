//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent take its id explicitly;
//! the `helpers` module creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, food, cart) = factory::helpers::create_cart_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let food = factory::food::FoodFactory::new(&db, category.id)
//!     .position_id(3)
//!     .name("Espresso")
//!     .price(2.5)
//!     .build()
//!     .await?;
//! ```

pub mod cart;
pub mod category;
pub mod food;
pub mod helpers;
pub mod user;

pub use cart::{create_cart, create_cart_item};
pub use category::{create_category, create_category_at};
pub use food::{create_food, create_food_at};
pub use user::{create_admin, create_user};
