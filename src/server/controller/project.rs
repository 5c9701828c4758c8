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
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        room::RoomDto,
    },
    server::{
        controller::extract::ValidatedJson,
        error::AppError,
        model::project::{CreateProjectParams, UpdateProjectParams},
        service::project::ProjectService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static PROJECT_TAG: &str = "project";

/// Documented project routes plus their admin mirrors
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_projects, create_project))
        .routes(routes!(get_project))
        .routes(routes!(get_project_rooms))
        .routes(routes!(get_project_by_id, update_project, delete_project))
        .route(
            "/api/admin/projects",
            get(get_projects).post(create_project),
        )
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects ordered by id", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).get_all().await?;

    let dto: Vec<ProjectDto> = projects.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = PROJECT_TAG,
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Project with the given slug", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/projects/{slug}/rooms",
    tag = PROJECT_TAG,
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Rooms belonging to the project", body = Vec<RoomDto>),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_rooms(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = ProjectService::new(&state.db).get_rooms(&slug).await?;

    let dto: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Successfully created project", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let project = ProjectService::new(&state.db)
        .create(CreateProjectParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project with the given ID", body = ProjectDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "project")?;

    let project = ProjectService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Successfully updated project", body = ProjectDto),
        (status = 400, description = "Invalid project data or ID", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "project")?;

    let project = ProjectService::new(&state.db)
        .update(id, UpdateProjectParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project and its rooms deleted", body = DeleteResultDto),
        (status = 400, description = "Invalid project ID", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "project")?;

    ProjectService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            success: true,
            message: format!("Project {} deleted successfully", id),
        }),
    ))
}
