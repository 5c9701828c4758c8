//! Front-end asset serving alongside the API.
//!
//! In development the HTML entry point is read from the client directory on every
//! request and its main script reference gets a fresh `?v=` query so browsers never
//! reuse a stale module graph. In production the built bundle is served with a
//! fallback to its `index.html` for client-side routes. Paths under `/api` are never
//! answered with HTML.

use std::path::{Path, PathBuf};

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use rand::Rng;

use crate::server::{
    config::Environment,
    error::{internal::InternalError, AppError},
    state::AppState,
};

const ENTRY_SCRIPT: &str = r#"src="/src/main.tsx""#;
const INDEX_FILE: &str = "index.html";
const CACHE_BUST_ID_LENGTH: usize = 21;

#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub environment: Environment,
    /// Directory containing the development `index.html` and source assets.
    pub client_dir: PathBuf,
    /// Directory containing the production bundle.
    pub dist_dir: PathBuf,
}

impl AssetConfig {
    /// Directory served as static files in the current mode.
    pub fn static_dir(&self) -> &Path {
        match self.environment {
            Environment::Development => self.client_dir.as_path(),
            Environment::Production => self.dist_dir.as_path(),
        }
    }
}

pub fn is_api_request(path: &str) -> bool {
    path.starts_with("/api")
}

/// Random URL-safe id used as the cache-busting query value.
pub fn cache_bust_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789_-";

    let mut rng = rand::rng();

    (0..CACHE_BUST_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Appends `?v=<version>` to the main script reference in an HTML template.
///
/// Only the exact `src="/src/main.tsx"` attribute is rewritten; other scripts are untouched.
pub fn bust_entry_script(template: &str, version: &str) -> String {
    template.replace(
        ENTRY_SCRIPT,
        &format!(r#"src="/src/main.tsx?v={}""#, version),
    )
}

async fn read_index(dir: &Path) -> Result<String, AppError> {
    let path = dir.join(INDEX_FILE);

    tokio::fs::read_to_string(&path).await.map_err(|e| {
        InternalError::EntryPoint {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Fallback for paths without a matching static file.
///
/// Development answers with the client entry point and a cache-busted script reference;
/// production answers with the bundled `index.html`. `/api` paths get a 404 JSON body.
pub async fn serve_index(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    if is_api_request(uri.path()) {
        return Err(AppError::NotFound(format!(
            "No API route for {}",
            uri.path()
        )));
    }

    let page = match state.assets.environment {
        Environment::Development => {
            let template = read_index(&state.assets.client_dir).await?;
            bust_entry_script(&template, &cache_bust_id())
        }
        Environment::Production => read_index(&state.assets.dist_dir).await?,
    };

    Ok(Html(page).into_response())
}
