use crate::server::{data::message::MessageRepository, model::message::CreateMessageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests storing a contact message.
///
/// Expected: Ok with the message persisted and counted
#[tokio::test]
async fn creates_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            name: "Lan".to_string(),
            email: "lan@example.com".to_string(),
            phone: None,
            message: "Is the villa free next weekend?".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.phone, None);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that messages are listed newest first.
///
/// Expected: Ok with the most recently inserted message first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_message(db).await?;
    let second = factory::create_message(db).await?;

    let messages = MessageRepository::new(db).get_all().await?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, second.id);
    assert_eq!(messages[1].id, first.id);

    Ok(())
}
