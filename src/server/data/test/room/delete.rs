use super::*;

/// Tests deleting a room.
///
/// Expected: Ok(true) and the room absent from the list
#[tokio::test]
async fn deletes_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, room) = factory::helpers::create_room_with_project(db).await?;
    let kept = factory::create_room(db, project.id).await?;

    let repo = RoomRepository::new(db);
    assert!(repo.delete(room.id).await?);

    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
