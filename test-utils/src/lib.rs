//! Homestay CMS Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the CMS
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models that are never inserted
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_rooms() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_content_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (project, room) = factory::helpers::create_room_with_project(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
