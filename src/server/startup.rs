use std::{path::Path, time::Duration};

use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::seed::SeedService,
};

/// Installs the global `tracing` subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds a `sqlite:` connection string for a file path, creating its parent directory.
///
/// Relative paths are resolved against the current working directory.
///
/// # Returns
/// - `Ok(String)` - Connection string opening the file in read-write-create mode
/// - `Err(AppError::IoErr)` - Working directory unreadable or parent directory not creatable
/// - `Err(AppError::ConfigErr(InvalidDatabasePath))` - Path cannot be expressed as a file URL
pub fn database_url(path: &Path) -> Result<String, AppError> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let url = Url::from_file_path(&path)
        .map_err(|_| ConfigError::InvalidDatabasePath(path.display().to_string()))?;

    Ok(format!("sqlite:{}?mode=rwc", url.path()))
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite file named in configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database path
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to prepare the path, connect, or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let url = database_url(&config.database_path)?;

    let mut opt = ConnectOptions::new(url);
    opt.connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        "Connected to database at {}",
        config.database_path.display()
    );

    Ok(db)
}

/// Populates sample content when the database is empty.
///
/// Seeding is best effort: failures are logged and startup continues.
pub async fn seed_database(db: &DatabaseConnection) {
    match SeedService::new(db).seed().await {
        Ok(true) => tracing::info!("Database seeded with sample content"),
        Ok(false) => tracing::info!("Database already contains projects, skipping seed"),
        Err(e) => tracing::warn!("Failed to seed database: {}", e),
    }
}
