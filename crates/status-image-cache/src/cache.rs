//! Whole-file storage of cached images under a single root directory

use crate::error::Result;
use crate::key::CacheKey;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// File extension shared by every cache entry
pub const ENTRY_EXTENSION: &str = "jpg";

const TEMP_PREFIX: &str = ".tmp_";

/// Whether [`ImageCache::init`] had to create the cache root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Existing,
}

/// Image cache backed by one file per key
///
/// No locking is performed. Concurrent writers for the same key race and the
/// last rename wins; readers never observe a partially written entry.
#[derive(Debug, Clone)]
pub struct ImageCache {
    root: PathBuf,
}

impl ImageCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ensure the cache root (and its parents) exists
    pub async fn init(&self) -> Result<InitOutcome> {
        let outcome = if fs::try_exists(&self.root).await? {
            InitOutcome::Existing
        } else {
            fs::create_dir_all(&self.root).await?;
            InitOutcome::Created
        };
        info!(cache_dir = ?self.root, ?outcome, "Cache initialized");
        Ok(outcome)
    }

    /// Location of the entry for `key`, e.g. `<root>/404.jpg`
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(format!("{}.{}", key, ENTRY_EXTENSION))
    }

    /// Read the full entry for `key`
    pub async fn get(&self, key: &CacheKey) -> Result<Vec<u8>> {
        let data = fs::read(self.entry_path(key)).await?;
        debug!(code = %key, size = data.len(), "Cache hit");
        Ok(data)
    }

    /// Store `data` as the entry for `key`, replacing any previous entry
    pub async fn put(&self, key: &CacheKey, data: &[u8]) -> Result<()> {
        let path = self.entry_path(key);
        let temp_path = self
            .root
            .join(format!("{}{}_{}", TEMP_PREFIX, key, uuid::Uuid::new_v4()));

        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &path).await {
            warn!(code = %key, error = %e, "Failed to move cache entry into place");
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(code = %key, size = data.len(), "Cached image");
        Ok(())
    }

    /// Delete the entry for `key`
    pub async fn remove(&self, key: &CacheKey) -> Result<()> {
        fs::remove_file(self.entry_path(key)).await?;
        debug!(code = %key, "Removed cache entry");
        Ok(())
    }
}
