//! Client configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `RECIPESHARE__`-prefixed environment variables.
//! Each sub-module represents a logical configuration section.

pub mod api;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Durable session storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay, and
    /// environment variables prefixed with `RECIPESHARE__`. Every file is
    /// optional; missing values fall back to the serde defaults.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("RECIPESHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
