//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::jwt::JwtService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` keeps its key material behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub jwt: JwtService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token service built from the configured secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtService) -> Self {
        Self { db, jwt }
    }
}
