//! In-memory key-value store using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use recipeshare_core::result::AppResult;
use recipeshare_core::traits::store::KeyValueStore;

/// Process-local store. Entries vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }

    fn backend(&self) -> &str {
        "memory"
    }
}
