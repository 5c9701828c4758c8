//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::middleware::assets::AssetConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<AssetConfig>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Where and how front-end assets are served.
    pub assets: Arc<AssetConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, assets: AssetConfig) -> Self {
        Self {
            db,
            assets: Arc::new(assets),
        }
    }
}
