use super::*;

/// Tests a partial project update.
///
/// Verifies that only provided fields change and the rest keep their values.
///
/// Expected: Ok(Some) with updated project
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let created = repo.create(create_params("garden-house")).await?;

    let updated = repo
        .update(
            created.id,
            UpdateProjectParams {
                name: Some("Garden House".to_string()),
                is_featured: Some(false),
                slogan: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Garden House");
    assert!(!updated.is_featured);
    assert_eq!(updated.slogan, None);
    assert_eq!(updated.slug, "garden-house");
    assert_eq!(updated.tags, created.tags);
    assert_eq!(updated.airbnb_url, created.airbnb_url);

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateProjectParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
