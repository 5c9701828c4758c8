//! Domain & parameter models for contact messages

use chrono::{DateTime, Utc};

use crate::model::message::{CreateMessageDto, MessageDto};

/// A contact form submission. Messages are never edited after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl From<CreateMessageDto> for CreateMessageParams {
    fn from(dto: CreateMessageDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.filter(|phone| !phone.trim().is_empty()),
            message: dto.message.unwrap_or_default(),
        }
    }
}
