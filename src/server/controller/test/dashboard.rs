use super::*;
use test_utils::factory;

/// Tests the dashboard payload shape and totals.
///
/// Expected: 200 with totals per table and growth figures
#[tokio::test]
async fn reports_totals_and_growth() {
    let app = TestApp::new().await;

    for _ in 0..5 {
        factory::create_project(app.db()).await.unwrap();
    }
    factory::create_message(app.db()).await.unwrap();

    let (status, body) = app.get("/api/admin/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["projects"]["total"], 5);
    assert_eq!(body["stats"]["projects"]["growth"], 25.0);
    assert_eq!(body["stats"]["services"]["total"], 0);
    assert_eq!(body["stats"]["services"]["growth"], 0.0);
    assert_eq!(body["stats"]["messages"]["total"], 1);
    assert_eq!(body["stats"]["messages"]["growth"], Value::Null);
}
