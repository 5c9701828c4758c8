use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::message::{CreateMessageParams, Message},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db).get_all().await?)
    }

    /// Stores a contact form submission
    pub async fn submit(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        let message = MessageRepository::new(self.db).create(params).await?;

        tracing::info!("Received contact message {} from {}", message.id, message.email);

        Ok(message)
    }
}
