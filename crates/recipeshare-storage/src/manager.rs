//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use recipeshare_core::config::StorageConfig;
use recipeshare_core::error::AppError;
use recipeshare_core::result::AppResult;
use recipeshare_core::traits::store::KeyValueStore;

/// Wraps the configured key-value backend.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.backend.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(path = %config.path, "Initializing file session storage");
                Arc::new(crate::file::FileStore::new(&config.path).await?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory session storage");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage backend: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await
    }

    fn backend(&self) -> &str {
        self.inner.backend()
    }
}
