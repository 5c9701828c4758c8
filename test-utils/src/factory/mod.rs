//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let project = factory::create_project(&db).await?;
//! let room = factory::room::RoomFactory::new(&db, project.id)
//!     .price(2_500_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `project` - Create project entities with unique slugs
//! - `room` - Create room entities linked to a project
//! - `service` - Create guest service entities
//! - `post` - Create blog post entities with unique slugs
//! - `message` - Create contact message entities
//! - `helpers` - ID generation and dependency helpers

pub mod helpers;
pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod service;

pub use message::create_message;
pub use post::create_post;
pub use project::create_project;
pub use room::create_room;
pub use service::create_service;
