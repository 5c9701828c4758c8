use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::{
    blank_as_none, validate_http_url, validate_http_url_or_blank, validate_slug,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(required(message = "Slug is required"), custom(function = "validate_slug"))]
    pub slug: Option<String>,
    #[validate(required(message = "Content is required"))]
    pub content: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "validate_http_url_or_blank"))]
    pub image_url: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub image_url: Option<String>,
    pub author: Option<String>,
}
