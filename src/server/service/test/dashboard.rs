use crate::server::{
    error::AppError,
    service::dashboard::{calculate_growth, DashboardService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests the synthetic growth figures.
///
/// Expected: 0 for empty tables, null when the baseline is zero, otherwise
/// rounded to one decimal
#[test]
fn calculates_growth() {
    assert_eq!(calculate_growth(0), Some(0.0));
    assert_eq!(calculate_growth(1), None);
    assert_eq!(calculate_growth(5), Some(25.0));
    assert_eq!(calculate_growth(7), Some(40.0));
    assert_eq!(calculate_growth(10), Some(25.0));
    assert_eq!(calculate_growth(3), Some(50.0));
}

/// Tests that the dashboard counts each table.
///
/// Expected: Ok with totals matching inserted rows
#[tokio::test]
async fn counts_each_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_project(db).await?;
    }
    factory::create_service(db).await?;
    factory::create_post(db).await?;
    factory::create_post(db).await?;

    let stats = DashboardService::new(db).stats().await?;

    assert_eq!(stats.projects.total, 5);
    assert_eq!(stats.projects.growth, Some(25.0));
    assert_eq!(stats.services.total, 1);
    assert_eq!(stats.services.growth, None);
    assert_eq!(stats.posts.total, 2);
    assert_eq!(stats.messages.total, 0);
    assert_eq!(stats.messages.growth, Some(0.0));

    Ok(())
}
