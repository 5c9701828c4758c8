//! Domain & parameter models for guest services offered by the business

use crate::model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto};

/// An amenity or offering such as airport pickup or motorbike rental.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestService {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl GuestService {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            icon: entity.icon,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            title: self.title,
            description: self.description,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl From<CreateServiceDto> for CreateServiceParams {
    fn from(dto: CreateServiceDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            icon: dto.icon.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl From<UpdateServiceDto> for UpdateServiceParams {
    fn from(dto: UpdateServiceDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            icon: dto.icon,
        }
    }
}
