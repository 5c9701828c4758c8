//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique slugs and names so multiple factory calls in one test
/// never collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a project and a room belonging to it, both with default values.
///
/// # Returns
/// - `Ok((project, room))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_project(
    db: &DatabaseConnection,
) -> Result<(entity::project::Model, entity::room::Model), DbErr> {
    let project = crate::factory::project::create_project(db).await?;
    let room = crate::factory::room::create_room(db, project.id).await?;

    Ok((project, room))
}
