use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::service::{CreateServiceParams, GuestService, UpdateServiceParams};

/// Repository for the `services` table.
pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GuestService>, DbErr> {
        let services = entity::prelude::Service::find()
            .order_by_asc(entity::service::Column::Id)
            .all(self.db)
            .await?;

        Ok(services.into_iter().map(GuestService::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GuestService>, DbErr> {
        let service = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(service.map(GuestService::from_entity))
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<GuestService, DbErr> {
        let service = entity::service::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(params.icon),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GuestService::from_entity(service))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateServiceParams,
    ) -> Result<Option<GuestService>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = service.into_active_model();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(icon) = params.icon {
            active_model.icon = ActiveValue::Set(icon);
        }

        let service = active_model.update(self.db).await?;

        Ok(Some(GuestService::from_entity(service)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Service::find().count(self.db).await
    }
}
