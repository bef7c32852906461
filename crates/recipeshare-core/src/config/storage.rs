//! Durable session storage configuration.

use serde::{Deserialize, Serialize};

/// Where the session token and serialized session are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend: `"memory"` or `"file"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Path of the JSON file used by the `"file"` backend.
    #[serde(default = "default_path")]
    pub path: String,
    /// Key holding the raw token string.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Key holding the serialized session JSON.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_path(),
            token_key: default_token_key(),
            session_key: default_session_key(),
        }
    }
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_path() -> String {
    "data/session.json".to_string()
}

fn default_token_key() -> String {
    "auth_token".to_string()
}

fn default_session_key() -> String {
    "current_user".to_string()
}
