use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState},
};

pub static DASHBOARD_TAG: &str = "dashboard";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_dashboard))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Row totals with synthetic growth figures", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = DashboardService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(DashboardDto { stats })))
}
