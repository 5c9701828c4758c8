use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{Room, RoomParams};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rooms ordered by id
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    /// Gets the rooms of a single project ordered by id
    pub async fn get_by_project(&self, project_id: i32) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(room.map(Room::from_entity))
    }

    /// Inserts a room; fails with a foreign key error if the project does not exist
    pub async fn create(&self, params: RoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status),
            project_id: ActiveValue::Set(params.project_id),
            description: ActiveValue::Set(params.description),
            amenities: ActiveValue::Set(params.amenities.into()),
            images: ActiveValue::Set(params.images.into()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(room))
    }

    /// Overwrites every field of an existing room
    ///
    /// Returns `None` if no room has the given id.
    pub async fn update(&self, id: i32, params: RoomParams) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = room.into_active_model();
        active_model.name = ActiveValue::Set(params.name);
        active_model.kind = ActiveValue::Set(params.kind);
        active_model.price = ActiveValue::Set(params.price);
        active_model.status = ActiveValue::Set(params.status);
        active_model.project_id = ActiveValue::Set(params.project_id);
        active_model.description = ActiveValue::Set(params.description);
        active_model.amenities = ActiveValue::Set(params.amenities.into());
        active_model.images = ActiveValue::Set(params.images.into());

        let room = active_model.update(self.db).await?;

        Ok(Some(Room::from_entity(room)))
    }

    /// Returns whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }
}
