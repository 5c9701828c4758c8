use super::*;

/// Tests a valid contact submission.
///
/// Expected: 201 and the message listed by both message routes
#[tokio::test]
async fn stores_contact_message() {
    let app = TestApp::new().await;

    let (status, message) = app
        .post(
            "/api/contact",
            json!({
                "name": "Minh",
                "email": "minh@example.com",
                "phone": "+84 90 000 0000",
                "message": "Do you have a room for two next Friday?"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["name"], "Minh");
    assert!(message["createdAt"].is_string());

    let (_, public) = app.get("/api/messages").await;
    let (_, admin) = app.get("/api/admin/messages").await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public, admin);
}

/// Tests a contact submission missing a required field.
///
/// Expected: 400 with the field name and nothing stored
#[tokio::test]
async fn missing_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/contact",
            json!({ "name": "Minh", "message": "Hello" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");

    let (_, messages) = app.get("/api/messages").await;
    assert!(messages.as_array().unwrap().is_empty());
}

/// Tests a contact submission with an invalid email address.
///
/// Expected: 400 naming the email field
#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/contact",
            json!({ "name": "Minh", "email": "not-an-email", "message": "Hello" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");
    assert_eq!(body["message"], "Invalid email address");
}
