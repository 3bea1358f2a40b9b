//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence,
//! Argon2 for password hashing and HS256 JWTs for bearer authentication.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request/response processing and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool and token service)
//! - **Startup** (`startup`) - Database connection, migrations and the startup admin account
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extract** (`extract`) - JSON body extractor that reports rejections as `AppError`
//! - **Util** (`util/`) - Input validation helpers
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the bearer token and checks permissions
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
