use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        message::{CreateMessageDto, MessageDto},
    },
    server::{
        controller::extract::ValidatedJson, error::AppError,
        model::message::CreateMessageParams, service::message::MessageService, state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(submit_contact))
        .routes(routes!(get_messages))
        .route("/api/admin/messages", get(get_messages))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message received", body = MessageDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = MessageService::new(&state.db)
        .submit(CreateMessageParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "All messages, newest first", body = Vec<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let messages = MessageService::new(&state.db).get_all().await?;

    let dto: Vec<MessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
