//! JSON-file key-value store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use recipeshare_core::error::{AppError, ErrorKind};
use recipeshare_core::result::AppResult;
use recipeshare_core::traits::store::KeyValueStore;

/// Durable store backed by one JSON object file.
///
/// Every mutation rewrites the whole file through a temporary sibling and
/// a rename, so a crash never leaves a half-written document behind. A
/// missing file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store at `path`, creating parent directories as needed.
    pub async fn new(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create storage directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read storage file: {}", self.path.display()),
                    e,
                ));
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Storage file is not a JSON object: {}", self.path.display()),
                e,
            )
        })
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write storage file: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace storage file: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), entries = entries.len(), "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries).await
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend(&self) -> &str {
        "file"
    }
}
