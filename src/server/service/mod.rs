//! Service layer between controllers and repositories.
//!
//! Services own the translation of missing records into `AppError::NotFound` and any
//! logic spanning more than one repository call, such as the room upsert, dashboard
//! aggregation and the startup seed.

pub mod catalog;
pub mod dashboard;
pub mod message;
pub mod post;
pub mod project;
pub mod room;
pub mod seed;

#[cfg(test)]
mod test;
