use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatusDto {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i64,
    pub status: RoomStatusDto,
    pub project_id: i32,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

/// Create-or-update payload; a non-zero `id` selects update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoomDto {
    pub id: Option<i32>,
    #[validate(
        required(message = "Room name is required"),
        length(min = 1, message = "Room name is required")
    )]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(
        required(message = "Room type is required"),
        length(min = 1, message = "Room type is required")
    )]
    pub kind: Option<String>,
    #[validate(
        required(message = "Price is required"),
        range(min = 0, message = "Price must be a positive number")
    )]
    pub price: Option<i64>,
    #[serde(default)]
    pub status: RoomStatusDto,
    #[validate(
        required(message = "Project is required"),
        range(min = 1, message = "Project is required")
    )]
    pub project_id: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}
