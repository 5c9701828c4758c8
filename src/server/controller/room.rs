use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DeleteResultDto, ErrorDto},
        room::{RoomDto, SaveRoomDto},
    },
    server::{
        controller::extract::ValidatedJson,
        error::AppError,
        model::room::SaveRoomParams,
        service::room::{RoomService, SaveOutcome},
        state::AppState,
        util::parse::parse_id,
    },
};

pub static ROOM_TAG: &str = "room";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_rooms))
        .routes(routes!(get_room))
        .routes(routes!(save_room))
        .routes(routes!(delete_room))
}

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms ordered by id", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    let dto: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room with the given id", body = RoomDto),
        (status = 400, description = "Invalid room ID", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "room")?;

    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Creates a room, or overwrites one when the body carries an `id`.
#[utoipa::path(
    post,
    path = "/api/admin/rooms/save",
    tag = ROOM_TAG,
    request_body = SaveRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 404, description = "Room with the given id not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_room(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = RoomService::new(&state.db)
        .save(SaveRoomParams::from(payload))
        .await?;

    let response = match outcome {
        SaveOutcome::Created(room) => (StatusCode::CREATED, Json(room.into_dto())),
        SaveOutcome::Updated(room) => (StatusCode::OK, Json(room.into_dto())),
    };

    Ok(response)
}

#[utoipa::path(
    delete,
    path = "/api/admin/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room deleted", body = DeleteResultDto),
        (status = 400, description = "Invalid room ID", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "room")?;

    RoomService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            success: true,
            message: format!("Room {} deleted successfully", id),
        }),
    ))
}
