//! Configuration module
//!
//! Media gateway credentials are loaded once at startup into an immutable
//! `MediaStorageConfig` value and injected into the gateway adapter. Nothing
//! in this workspace reads gateway configuration from ambient global state,
//! so tests can construct adapters with distinct configurations.

use std::env;

use crate::error::AppError;

const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Immutable configuration for the media storage gateway.
#[derive(Clone, Debug)]
pub struct MediaStorageConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Base URL of the gateway API. Overridable for S3-compatible mocks and
    /// test servers; defaults to the hosted endpoint.
    pub api_base_url: String,
}

impl MediaStorageConfig {
    /// Load configuration from environment variables (`.env` is honored).
    ///
    /// Required: `MEDIA_CLOUD_NAME`, `MEDIA_API_KEY`, `MEDIA_API_SECRET`.
    /// Optional: `MEDIA_API_BASE_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(MediaStorageConfig {
            cloud_name: require_env("MEDIA_CLOUD_NAME")?,
            api_key: require_env("MEDIA_API_KEY")?,
            api_secret: require_env("MEDIA_API_SECRET")?,
            api_base_url: env::var("MEDIA_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::InvalidInput(format!("{} not configured", name)))
}
