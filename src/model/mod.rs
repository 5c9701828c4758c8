//! API data transfer objects.
//!
//! Request and response shapes exchanged over HTTP. Field names follow the camelCase
//! convention the front-end expects. Request DTOs carry `validator` rules; they are
//! checked by the `ValidatedJson` extractor before a handler runs.

pub mod api;
pub mod dashboard;
pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod service;
pub mod validate;
