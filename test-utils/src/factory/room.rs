//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::room::RoomStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms linked to an existing project.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::room::Model,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory for the given project with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::room::entity_builder()
            .name(format!("Room {}", id))
            .project_id(project_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn status(mut self, status: RoomStatus) -> Self {
        self.entity.status = status;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            kind: ActiveValue::Set(self.entity.kind),
            price: ActiveValue::Set(self.entity.price),
            status: ActiveValue::Set(self.entity.status),
            project_id: ActiveValue::Set(self.entity.project_id),
            description: ActiveValue::Set(self.entity.description),
            amenities: ActiveValue::Set(self.entity.amenities),
            images: ActiveValue::Set(self.entity.images),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values for the given project.
pub async fn create_room(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, project_id).build().await
}
