//! Wire DTOs shared by every HTTP endpoint.
//!
//! Field names are camelCase on the wire. Each DTO derives `ToSchema` so it
//! appears in the generated OpenAPI document.

pub mod api;
pub mod cart;
pub mod category;
pub mod food;
pub mod user;
