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
        post::{CreatePostDto, PostDto, UpdatePostDto},
    },
    server::{
        controller::extract::ValidatedJson,
        error::AppError,
        model::post::{CreatePostParams, UpdatePostParams},
        service::post::PostService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static POST_TAG: &str = "post";

/// Documented post routes plus their admin mirrors
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_posts, create_post))
        .routes(routes!(get_post))
        .routes(routes!(get_post_by_id, update_post, delete_post))
        .route("/api/admin/posts", get(get_posts).post(create_post))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).get_all().await?;

    let dto: Vec<PostDto> = posts.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    tag = POST_TAG,
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post with the given slug", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .create(CreatePostParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with the given ID", body = PostDto),
        (status = 400, description = "Invalid post ID", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "post")?;

    let post = PostService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 400, description = "Invalid post data or ID", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "post")?;

    let post = PostService::new(&state.db)
        .update(id, UpdatePostParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted", body = DeleteResultDto),
        (status = 400, description = "Invalid post ID", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "post")?;

    PostService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResultDto {
            success: true,
            message: format!("Post {} deleted successfully", id),
        }),
    ))
}
