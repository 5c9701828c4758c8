use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::assets::AssetConfig,
};

const DEFAULT_DATABASE_PATH: &str = ".local/db.sqlite";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLIENT_DIR: &str = "client";
const DEFAULT_DIST_DIR: &str = "dist/public";

/// Runtime mode selecting how front-end assets are served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

pub struct Config {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub client_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `PORT` is set but not a valid port
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: lookup("APP_ENV")
                .map(|value| Environment::from_value(&value))
                .unwrap_or(Environment::Development),
            client_dir: lookup("CLIENT_DIR")
                .unwrap_or_else(|| DEFAULT_CLIENT_DIR.to_string())
                .into(),
            dist_dir: lookup("DIST_DIR")
                .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string())
                .into(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn assets(&self) -> AssetConfig {
        AssetConfig {
            environment: self.environment,
            client_dir: self.client_dir.clone(),
            dist_dir: self.dist_dir.clone(),
        }
    }
}
