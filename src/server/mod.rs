//! HTTP backend for the homestay CMS.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, request validation and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Front-end asset serving alongside the API
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, asset settings)
//! - **Startup** (`startup`) - Logging, database connection, migrations and seeding
//! - **Router** (`router`) - Axum route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches to a controller
//! 2. **Controller** extracts and validates input, converts DTOs to params
//! 3. **Service** applies any orchestration and calls the repository
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds with JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
