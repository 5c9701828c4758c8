//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod service;

#[cfg(test)]
mod test;
