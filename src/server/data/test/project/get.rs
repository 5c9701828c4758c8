use super::*;

/// Tests looking up a project by slug.
///
/// Expected: Ok(Some) with the matching project
#[tokio::test]
async fn finds_project_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ProjectFactory::new(db).slug("hoian-oasis").build().await?;
    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let found = repo.get_by_slug("hoian-oasis").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let found = repo.get_by_slug("missing").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests listing projects.
///
/// Verifies that projects come back in insertion (id) order.
///
/// Expected: Ok with all projects ordered by id
#[tokio::test]
async fn lists_projects_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;
    let third = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(repo.count().await?, 3);

    Ok(())
}
