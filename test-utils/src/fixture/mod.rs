//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let admin = fixture::user::entity_builder()
//!     .role("ADMIN")
//!     .build();
//! ```

pub mod category;
pub mod food;
pub mod user;

pub use category::{entity as category_entity, entity_builder as category_entity_builder};
pub use food::{entity as food_entity, entity_builder as food_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
