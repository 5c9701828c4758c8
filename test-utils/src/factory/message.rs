//! Contact message factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a contact message from a unique sender.
pub async fn create_message(db: &DatabaseConnection) -> Result<entity::message::Model, DbErr> {
    let id = next_id();

    entity::message::ActiveModel {
        name: ActiveValue::Set(format!("Guest {}", id)),
        email: ActiveValue::Set(format!("guest{}@example.com", id)),
        phone: ActiveValue::Set(None),
        message: ActiveValue::Set("Is the river suite free next week?".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
