use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::RoomRepository,
    error::AppError,
    model::room::{Room, SaveRoomParams},
};

/// Result of a room upsert, distinguishing inserts from overwrites.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(Room),
    Updated(Room),
}

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))
    }

    /// Creates a room, or overwrites the room named by `params.id`
    ///
    /// # Returns
    /// - `Ok(SaveOutcome::Created)` - No id was given and a new row was inserted
    /// - `Ok(SaveOutcome::Updated)` - The room with the given id was overwritten
    /// - `Err(AppError::NotFound)` - An id was given but no such room exists
    pub async fn save(&self, params: SaveRoomParams) -> Result<SaveOutcome, AppError> {
        let repo = RoomRepository::new(self.db);

        match params.id {
            Some(id) => {
                let room = repo
                    .update(id, params.room)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", id)))?;

                tracing::debug!("Updated room {}", room.id);

                Ok(SaveOutcome::Updated(room))
            }
            None => {
                let room = repo.create(params.room).await?;

                tracing::debug!("Created room {} for project {}", room.id, room.project_id);

                Ok(SaveOutcome::Created(room))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RoomRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Room with id {} not found", id)));
        }

        tracing::debug!("Deleted room {}", id);

        Ok(())
    }
}
