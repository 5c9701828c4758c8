use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    ///
    /// Raised for values such as a non-numeric `PORT`.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// The SQLite file path cannot be turned into a connection URL.
    #[error("Invalid database path: {0}")]
    InvalidDatabasePath(String),
}
