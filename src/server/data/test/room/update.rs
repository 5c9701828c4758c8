use super::*;

/// Tests overwriting an existing room.
///
/// Verifies that every field is replaced and no new row is inserted.
///
/// Expected: Ok(Some) with updated room
#[tokio::test]
async fn overwrites_room_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, room) = factory::helpers::create_room_with_project(db).await?;

    let repo = RoomRepository::new(db);
    let mut params = room_params(project.id);
    params.price = 2_000_000;
    params.status = RoomStatus::Maintenance;

    let updated = repo.update(room.id, params).await?.unwrap();

    assert_eq!(updated.id, room.id);
    assert_eq!(updated.name, "Lotus Suite");
    assert_eq!(updated.price, 2_000_000);
    assert_eq!(updated.status, RoomStatus::Maintenance);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::create_project(db).await?;

    let repo = RoomRepository::new(db);
    let result = repo.update(999, room_params(project.id)).await?;

    assert!(result.is_none());

    Ok(())
}
