//! Guest service factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guest service with a unique title.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    let id = next_id();

    entity::service::ActiveModel {
        title: ActiveValue::Set(format!("Service {}", id)),
        description: ActiveValue::Set("Airport pickup and drop-off".to_string()),
        icon: ActiveValue::Set("car".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
