use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validate::{
    blank_as_none, validate_http_url, validate_http_url_or_blank, validate_slug,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub slogan: Option<String>,
    pub description: Option<String>,
    pub airbnb_url: Option<String>,
    pub is_featured: bool,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Slug is required"), custom(function = "validate_slug"))]
    pub slug: Option<String>,
    pub slogan: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "validate_http_url_or_blank"))]
    pub airbnb_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "type")]
    #[validate(
        required(message = "Type is required"),
        length(min = 1, message = "Type is required")
    )]
    pub kind: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,
    pub slogan: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub airbnb_url: Option<String>,
    pub is_featured: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    pub kind: Option<String>,
}
