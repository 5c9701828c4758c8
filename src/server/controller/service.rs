use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto},
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        controller::extract::ValidatedJson,
        error::AppError,
        model::service::{CreateServiceParams, UpdateServiceParams},
        service::catalog::CatalogService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static SERVICE_TAG: &str = "service";

/// Documented guest service routes plus their admin mirrors
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_services, create_service))
        .routes(routes!(get_service_by_id, update_service, delete_service))
        .route(
            "/api/admin/services",
            get(get_services).post(create_service),
        )
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "All guest services ordered by id", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.db).get_all().await?;

    let dto: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db)
        .create(CreateServiceParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service with the given ID", body = ServiceDto),
        (status = 400, description = "Invalid service ID", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "service")?;

    let service = CatalogService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Invalid service data or ID", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "service")?;

    let service = CatalogService::new(&state.db)
        .update(id, UpdateServiceParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    tag = SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service deleted", body = DeleteResultDto),
        (status = 400, description = "Invalid service ID", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "service")?;

    CatalogService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            success: true,
            message: format!("Service {} deleted successfully", id),
        }),
    ))
}
