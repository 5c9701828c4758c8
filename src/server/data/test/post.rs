use crate::server::{
    data::post::PostRepository,
    model::post::{CreatePostParams, UpdatePostParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::post::PostFactory};

/// Tests that posts are listed newest first.
///
/// Expected: Ok with posts ordered by creation time descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = PostFactory::new(db).minutes_ago(120).build().await?;
    let newest = PostFactory::new(db).minutes_ago(1).build().await?;
    let middle = PostFactory::new(db).minutes_ago(30).build().await?;

    let repo = PostRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests creating a post and retrieving it by slug.
///
/// Expected: Ok(Some) with the created post
#[tokio::test]
async fn creates_and_finds_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let created = repo
        .create(CreatePostParams {
            title: "Top 5 cafes in Hoi An".to_string(),
            slug: "top-5-cafe-hoian".to_string(),
            content: "Coffee everywhere".to_string(),
            category: Some("Food".to_string()),
            image_url: None,
            author: None,
        })
        .await?;

    let found = repo.get_by_slug("top-5-cafe-hoian").await?;

    assert_eq!(found, Some(created));
    assert!(repo.get_by_slug("unknown").await?.is_none());

    Ok(())
}

/// Tests updating and deleting a post.
///
/// Expected: Ok with the title changed, then the post removed
#[tokio::test]
async fn updates_then_deletes_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = factory::create_post(db).await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(
            post.id,
            UpdatePostParams {
                title: Some("Renamed".to_string()),
                author: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.author, None);
    assert_eq!(updated.slug, post.slug);

    assert!(repo.delete(post.id).await?);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
