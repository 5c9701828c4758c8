//! SeaORM entities for the homestay content store.
//!
//! Each module maps one table. List-valued columns (tags, images, amenities) are stored
//! as JSON text through [`StringList`].

pub mod prelude;

pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod service;
pub mod string_list;

pub use string_list::StringList;
