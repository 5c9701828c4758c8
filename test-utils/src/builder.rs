use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh database.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Project)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues a CREATE TABLE statement generated from `entity`.
    ///
    /// Tables are created in the order they are added, so `Project` must precede `Room`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every content table: projects, rooms, services, posts and messages.
    pub fn with_content_tables(self) -> Self {
        self.with_table(Project)
            .with_table(Room)
            .with_table(Service)
            .with_table(Post)
            .with_table(Message)
    }

    /// Opens the in-memory database and creates the queued tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
