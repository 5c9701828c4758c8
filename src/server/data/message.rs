use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message};

/// Append-only access to contact messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all messages, newest first
    pub async fn get_all(&self) -> Result<Vec<Message>, DbErr> {
        let messages = entity::prelude::Message::find()
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(messages.into_iter().map(Message::from_entity).collect())
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let message = entity::message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(message))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Message::find().count(self.db).await
    }
}
