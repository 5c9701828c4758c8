//! Domain & parameter models for room operations

use entity::room::RoomStatus;

use crate::model::room::{RoomDto, RoomStatusDto, SaveRoomDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub price: i64,
    pub status: RoomStatus,
    pub project_id: i32,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
            price: entity.price,
            status: entity.status,
            project_id: entity.project_id,
            description: entity.description,
            amenities: entity.amenities.into(),
            images: entity.images.into(),
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
            kind: self.kind,
            price: self.price,
            status: status_to_dto(self.status),
            project_id: self.project_id,
            description: self.description,
            amenities: self.amenities,
            images: self.images,
        }
    }
}

fn status_to_dto(status: RoomStatus) -> RoomStatusDto {
    match status {
        RoomStatus::Available => RoomStatusDto::Available,
        RoomStatus::Occupied => RoomStatusDto::Occupied,
        RoomStatus::Maintenance => RoomStatusDto::Maintenance,
    }
}

fn status_from_dto(status: RoomStatusDto) -> RoomStatus {
    match status {
        RoomStatusDto::Available => RoomStatus::Available,
        RoomStatusDto::Occupied => RoomStatus::Occupied,
        RoomStatusDto::Maintenance => RoomStatus::Maintenance,
    }
}

/// Full set of room fields, used for both insert and overwrite.
#[derive(Debug, Clone)]
pub struct RoomParams {
    pub name: String,
    pub kind: String,
    pub price: i64,
    pub status: RoomStatus,
    pub project_id: i32,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

/// Parameters for the save operation
///
/// Creates a room when `id` is `None`, otherwise replaces the room with that id.
#[derive(Debug, Clone)]
pub struct SaveRoomParams {
    pub id: Option<i32>,
    pub room: RoomParams,
}

/// Built from a DTO that has already passed validation, so required fields are present.
///
/// An `id` of 0 never names a stored row and is treated as a create.
impl From<SaveRoomDto> for SaveRoomParams {
    fn from(dto: SaveRoomDto) -> Self {
        Self {
            id: dto.id.filter(|id| *id != 0),
            room: RoomParams {
                name: dto.name.unwrap_or_default(),
                kind: dto.kind.unwrap_or_default(),
                price: dto.price.unwrap_or_default(),
                status: status_from_dto(dto.status),
                project_id: dto.project_id.unwrap_or_default(),
                description: dto.description,
                amenities: dto.amenities,
                images: dto.images,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_fixture_to_dto() {
        let entity = test_utils::fixture::room::entity_builder()
            .id(7)
            .status(RoomStatus::Maintenance)
            .amenities(&["Wifi", "Air conditioning"])
            .build();

        let dto = Room::from_entity(entity).into_dto();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.status, RoomStatusDto::Maintenance);
        assert_eq!(dto.amenities, vec!["Wifi", "Air conditioning"]);
    }

    #[test]
    fn save_params_default_to_available() {
        let params = SaveRoomParams::from(SaveRoomDto {
            name: Some("Garden room".to_string()),
            kind: Some("double".to_string()),
            price: Some(750_000),
            project_id: Some(2),
            ..Default::default()
        });

        assert_eq!(params.id, None);
        assert_eq!(params.room.status, RoomStatus::Available);
        assert_eq!(params.room.project_id, 2);
    }

    #[test]
    fn zero_id_saves_as_new_room() {
        let params = SaveRoomParams::from(SaveRoomDto {
            id: Some(0),
            name: Some("Garden room".to_string()),
            kind: Some("double".to_string()),
            price: Some(750_000),
            project_id: Some(2),
            ..Default::default()
        });

        assert_eq!(params.id, None);
    }
}
