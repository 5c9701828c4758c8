use thiserror::Error;

/// Errors raised while preparing a test database.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// The context was used before a connection was opened.
    #[error("test context has no database connection")]
    NotConnected,
}
