use sea_orm::DatabaseConnection;

use crate::server::{
    data::service::ServiceRepository,
    error::AppError,
    model::service::{CreateServiceParams, GuestService, UpdateServiceParams},
};

/// Manages the catalog of guest services.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GuestService>, AppError> {
        Ok(ServiceRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<GuestService, AppError> {
        ServiceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service with id {} not found", id)))
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<GuestService, AppError> {
        Ok(ServiceRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateServiceParams,
    ) -> Result<GuestService, AppError> {
        ServiceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service with id {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ServiceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Service with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
