//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the default
//! values for factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let project = fixture::project::entity();
//!
//! let villa = fixture::project::entity_builder()
//!     .slug("riverside-villa")
//!     .kind("villa")
//!     .build();
//! ```

pub mod project;
pub mod room;

pub use project::{entity as project_entity, entity_builder as project_entity_builder};
pub use room::{entity as room_entity, entity_builder as room_entity_builder};
