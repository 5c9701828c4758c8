use super::*;

/// Tests creating a room for an existing project.
///
/// Expected: Ok with created room
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = RoomRepository::new(db);
    let room = repo.create(room_params(project.id)).await?;

    assert!(room.id > 0);
    assert_eq!(room.project_id, project.id);
    assert_eq!(room.status, RoomStatus::Available);
    assert_eq!(room.amenities, vec!["Wifi", "Bathtub"]);

    Ok(())
}

/// Tests creating a room for a project that does not exist.
///
/// Verifies that the foreign key is enforced by the store.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo.create(room_params(404)).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
