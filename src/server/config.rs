use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// Base URL prefixed to `Location` headers. Empty yields relative locations.
    pub app_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            app_url: std::env::var("APP_URL").unwrap_or_default(),
        })
    }
}
