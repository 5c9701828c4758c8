use axum::{handler::Handler, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Environment,
    controller::{
        dashboard::{self, DASHBOARD_TAG},
        message::{self, MESSAGE_TAG},
        post::{self, POST_TAG},
        project::{self, PROJECT_TAG},
        room::{self, ROOM_TAG},
        service::{self, SERVICE_TAG},
    },
    middleware::assets::serve_index,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Homestay CMS API", description = "Content API for homestay listings"),
    tags(
        (name = PROJECT_TAG, description = "Homestay and villa listings"),
        (name = ROOM_TAG, description = "Rooms belonging to a project"),
        (name = SERVICE_TAG, description = "Guest services"),
        (name = POST_TAG, description = "Blog posts"),
        (name = MESSAGE_TAG, description = "Contact messages"),
        (name = DASHBOARD_TAG, description = "Admin dashboard"),
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// API routes are registered with their OpenAPI documentation, served at `/api/docs`.
/// Every other path falls through to the static asset directory and then to the
/// HTML entry point.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(project::routes())
        .merge(room::routes())
        .merge(service::routes())
        .merge(post::routes())
        .merge(message::routes())
        .merge(dashboard::routes())
        .split_for_parts();

    let assets = state.assets.clone();
    let frontend = ServeDir::new(assets.static_dir())
        .append_index_html_on_directories(assets.environment == Environment::Production)
        .call_fallback_on_method_not_allowed(true)
        .fallback(serve_index.with_state(state.clone()));

    let router = api
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http());

    let router = match assets.environment {
        Environment::Development => router.layer(CorsLayer::permissive()),
        Environment::Production => router,
    };

    router.with_state(state)
}
