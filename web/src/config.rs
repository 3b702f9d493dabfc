//! Environment-driven settings for the server. Missing values disable only the
//! operation that needs them.

use std::env;
use std::sync::OnceLock;

use thiserror::Error;

const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not configured.")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub api_base: String,
    pub cloud_name: String,
    pub upload_preset: String,
    /// Signed credentials, only needed to delete uploads.
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub cloudinary: Option<CloudinaryConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cloudinary = match (get("CLOUDINARY_CLOUD_NAME"), get("CLOUDINARY_UPLOAD_PRESET")) {
            (Some(cloud_name), Some(upload_preset)) => Some(CloudinaryConfig {
                api_base: get("CLOUDINARY_API_BASE")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_BASE.to_string()),
                cloud_name,
                upload_preset,
                api_key: get("CLOUDINARY_API_KEY"),
                api_secret: get("CLOUDINARY_API_SECRET"),
            }),
            _ => None,
        };

        Self {
            database_url: get("DATABASE_URL"),
            cloudinary,
        }
    }

    pub fn cloudinary(&self) -> Result<&CloudinaryConfig, ConfigError> {
        self.cloudinary
            .as_ref()
            .ok_or(ConfigError::Missing("Cloudinary"))
    }
}

/// Loaded once on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}
