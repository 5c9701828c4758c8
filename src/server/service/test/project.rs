use crate::server::{error::AppError, service::project::ProjectService};
use test_utils::{builder::TestBuilder, factory, factory::project::ProjectFactory};

/// Tests fetching the rooms of a project by slug.
///
/// Expected: Ok with the project's rooms only
#[tokio::test]
async fn gets_rooms_by_project_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = ProjectFactory::new(db).slug("garden-villa").build().await?;
    let room = factory::create_room(db, project.id).await?;
    factory::helpers::create_room_with_project(db).await?;

    let rooms = ProjectService::new(db).get_rooms("garden-villa").await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, room.id);

    Ok(())
}

/// Tests lookups for an unknown slug.
///
/// Expected: Err(NotFound) for both the project and its rooms
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProjectService::new(db);

    assert!(matches!(
        service.get_by_slug("nowhere").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_rooms("nowhere").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
