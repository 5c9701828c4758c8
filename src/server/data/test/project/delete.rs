use super::*;
use crate::server::data::room::RoomRepository;

/// Tests deleting a project.
///
/// Expected: Ok(true) and project no longer retrievable
#[tokio::test]
async fn deletes_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.delete(project.id).await?);
    assert!(repo.get_by_id(project.id).await?.is_none());

    Ok(())
}

/// Tests deleting a project that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests that deleting a project removes its rooms.
///
/// Expected: Ok with the project's rooms cascaded away and other rooms kept
#[tokio::test]
async fn cascades_to_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, _) = factory::helpers::create_room_with_project(db).await?;
    factory::create_room(db, project.id).await?;
    let (_, other_room) = factory::helpers::create_room_with_project(db).await?;

    ProjectRepository::new(db).delete(project.id).await?;

    let remaining = RoomRepository::new(db).get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_room.id);

    Ok(())
}
