use super::*;

/// Tests listing the rooms of one project.
///
/// Verifies that rooms of other projects are excluded.
///
/// Expected: Ok with only the project's rooms in id order
#[tokio::test]
async fn returns_rooms_for_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (project, first) = factory::helpers::create_room_with_project(db).await?;
    let second = RoomFactory::new(db, project.id)
        .status(RoomStatus::Occupied)
        .build()
        .await?;
    factory::helpers::create_room_with_project(db).await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_by_project(project.id).await?;

    let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(rooms[1].status, RoomStatus::Occupied);
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
