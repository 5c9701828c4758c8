use crate::server::{
    data::{project::ProjectRepository, room::RoomRepository},
    error::AppError,
    service::{dashboard::DashboardService, seed::SeedService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests seeding an empty database.
///
/// Expected: Ok(true) with 3 projects, 4 services, 2 posts and 4 rooms
#[tokio::test]
async fn seeds_empty_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(SeedService::new(db).seed().await?);

    let stats = DashboardService::new(db).stats().await?;
    assert_eq!(stats.projects.total, 3);
    assert_eq!(stats.services.total, 4);
    assert_eq!(stats.posts.total, 2);
    assert_eq!(RoomRepository::new(db).count().await?, 4);

    let riverside = ProjectRepository::new(db)
        .get_by_slug("hoian-riverside-oasis")
        .await?
        .unwrap();
    let rooms = RoomRepository::new(db).get_by_project(riverside.id).await?;
    assert_eq!(rooms.len(), 2);

    Ok(())
}

/// Tests that seeding twice does not duplicate data.
///
/// Expected: Ok(false) on the second run and exactly one copy of each project
#[tokio::test]
async fn seeding_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seed = SeedService::new(db);
    assert!(seed.seed().await?);
    assert!(!seed.seed().await?);

    let projects = ProjectRepository::new(db).get_all().await?;
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "hoian-riverside-oasis",
            "ancient-town-heritage",
            "phu-sa-terrace"
        ]
    );
    assert_eq!(RoomRepository::new(db).count().await?, 4);

    Ok(())
}

/// Tests that an existing project prevents seeding.
///
/// Expected: Ok(false) and no sample rows written
#[tokio::test]
async fn skips_when_projects_exist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    assert!(!SeedService::new(db).seed().await?);

    let stats = DashboardService::new(db).stats().await?;
    assert_eq!(stats.projects.total, 1);
    assert_eq!(stats.services.total, 0);

    Ok(())
}
