//! Configuration module
//!
//! Environment-driven configuration for the article service: server binding,
//! database connection, image storage directory, and attachment limits.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_IMAGE_DIR: &str = "images";
const DEFAULT_MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_IMAGES_PER_ARTICLE: usize = 3;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Directory where attached image payloads are written.
    pub image_dir: PathBuf,
    /// Image payloads above this size are rejected before any file write.
    pub max_image_size_bytes: usize,
    /// Attachment capacity per article.
    pub max_images_per_article: usize,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    /// for everything except `DATABASE_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Internal("DATABASE_URL must be set".to_string()))?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_timeout_seconds: parse_env("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS)?,
            image_dir: env::var("IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGE_DIR)),
            max_image_size_bytes: parse_env(
                "MAX_IMAGE_SIZE_BYTES",
                DEFAULT_MAX_IMAGE_SIZE_BYTES,
            )?,
            max_images_per_article: parse_env(
                "MAX_IMAGES_PER_ARTICLE",
                DEFAULT_MAX_IMAGES_PER_ARTICLE,
            )?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Invalid value for {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}
