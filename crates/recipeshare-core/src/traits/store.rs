//! Durable key-value storage trait for session persistence.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for durable string storage backends (in-memory or file-backed).
///
/// Mirrors what a browser's local storage offers: string keys, string
/// values, and entries that live until they are explicitly removed.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Remove every entry.
    async fn clear(&self) -> AppResult<()>;

    /// Short backend name used in logs (e.g. `"memory"`, `"file"`).
    fn backend(&self) -> &str;
}
