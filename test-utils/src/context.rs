use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test handle on an in-memory SQLite database.
///
/// Each context owns its own `sqlite::memory:` database, so tests never observe each
/// other's rows. Foreign keys are switched on explicitly so room rows cascade with
/// their project exactly as they do against the on-disk store.
pub struct TestContext {
    /// Connection opened by `connect`; `None` until the first call.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the open connection, opening it on first use.
    pub async fn connect(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
            self.db = Some(db);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Parent tables must come before the tables that reference them.
    pub async fn create_tables(
        &mut self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.connect().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
