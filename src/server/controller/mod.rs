//! HTTP request handlers.
//!
//! Each handler extracts and validates its input, calls one service operation and
//! converts the resulting domain model into a DTO. Admin routes reuse the public
//! handlers; see `router` for the full route table.

pub mod dashboard;
pub mod extract;
pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod service;

#[cfg(test)]
mod test;
