//! Question and answer API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, field validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules applied between controllers and data layer
//! - **Data Layer** (`data/`) - The `QaRepository` trait and its implementations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the repository)
//! - **Startup** (`startup`) - Database connection, migrations, logging, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** decodes and validates input, converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls the repository
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
