use super::*;

/// Tests creating a project with list columns.
///
/// Verifies that the repository assigns an id and persists tags and images
/// in their original order.
///
/// Expected: Ok with created project
#[tokio::test]
async fn creates_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo.create(create_params("riverside-villa")).await?;

    assert!(project.id > 0);
    assert_eq!(project.slug, "riverside-villa");
    assert_eq!(project.tags, vec!["Pool", "Garden"]);
    assert!(project.is_featured);

    let stored = repo.get_by_id(project.id).await?.unwrap();
    assert_eq!(stored, project);

    Ok(())
}

/// Tests that slugs are unique.
///
/// Verifies that inserting a second project with an existing slug is rejected
/// by the store.
///
/// Expected: Err on duplicate slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    repo.create(create_params("same-slug")).await?;
    let result = repo.create(create_params("same-slug")).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
