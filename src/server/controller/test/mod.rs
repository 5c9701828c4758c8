use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::Environment,
    middleware::assets::{cache_bust_id, AssetConfig},
    router::router,
    state::AppState,
};

mod contact;
mod dashboard;

/// Router backed by a fresh in-memory database.
///
/// The context is kept alive alongside the router so tests can seed data directly.
struct TestApp {
    test: TestContext,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_assets(AssetConfig {
            environment: Environment::Development,
            client_dir: PathBuf::from("missing-client-dir"),
            dist_dir: PathBuf::from("missing-dist-dir"),
        })
        .await
    }

    async fn with_assets(assets: AssetConfig) -> Self {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        Self {
            test,
            router: router(AppState::new(db, assets)),
        }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, text) = self.request_text(method, uri, body).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap()
        };

        (status, value)
    }

    async fn request_text(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }
}

/// Creates an empty scratch directory under the system temp dir.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("homestay-cms-{}", cache_bust_id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn project_body(slug: &str) -> Value {
    json!({
        "name": "Hội An Riverside Oasis",
        "slug": slug,
        "slogan": "Riverside calm",
        "airbnbUrl": "https://airbnb.com/h/hoian-riverside",
        "isFeatured": true,
        "tags": ["Riverside", "Pool"],
        "images": ["https://images.example.com/1.jpg"],
        "type": "villa"
    })
}
