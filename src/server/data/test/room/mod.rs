use crate::server::{data::room::RoomRepository, model::room::RoomParams};
use entity::room::RoomStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, room::RoomFactory},
};

mod create;
mod delete;
mod get_by_project;
mod update;

fn room_params(project_id: i32) -> RoomParams {
    RoomParams {
        name: "Lotus Suite".to_string(),
        kind: "suite".to_string(),
        price: 1_500_000,
        status: RoomStatus::Available,
        project_id,
        description: Some("Balcony facing the rice fields".to_string()),
        amenities: vec!["Wifi".to_string(), "Bathtub".to_string()],
        images: vec![],
    }
}
