//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and uniqueness rules before any write
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Credentials**: Password hashing and token issuance

pub mod cart;
pub mod category;
pub mod food;
pub mod jwt;
pub mod password;
pub mod user;

#[cfg(test)]
mod test;
