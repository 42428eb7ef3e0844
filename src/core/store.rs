//! Filesystem-backed cache store.
//!
//! One persisted container per cache key, serialized as human-readable JSON
//! inside a configurable cache directory. Each container holds exactly one
//! named entry list plus the dataset identity string it was built against
//! (kept for diagnostics) and a write timestamp.
//!
//! # Public API
//! - [`CacheStore`]: exists/load/save/delete plus directory setup
//!
//! Writes are not transactional: a crash mid-write can leave a corrupt
//! container behind. That surfaces on the next load as `CacheCorrupt`, never
//! as silent wrong data, and the caller can delete and rebuild.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::core::entry_list::EntryList;
use crate::core::error::{EntryCacheError, Result};
use crate::core::key::CacheKey;

/// Persisted container: one named entry list per cache key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    list: EntryList,
    dataset: String,
    written_at: SystemTime,
}

/// Load/save/delete of persisted entry lists under one cache directory.
///
/// The directory is plain constructor state; nothing global. Concurrent
/// writers on the same key are unsupported (no locking).
#[derive(Debug, Clone)]
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Path of the persisted entry for `key`.
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir.join(key.file_name())
    }

    /// Create the cache directory if missing.
    ///
    /// Fails with `InvalidCacheDirectory` if the path exists but is not a
    /// directory; that is a configuration error and aborts the run.
    pub fn ensure_directory(&self) -> Result<()> {
        if self.cache_dir.exists() {
            if !self.cache_dir.is_dir() {
                return Err(EntryCacheError::invalid_cache_directory(&self.cache_dir));
            }
            return Ok(());
        }
        fs::create_dir_all(&self.cache_dir).map_err(|e| {
            log::error!(
                "Failed to create cache directory '{}': {}",
                self.cache_dir.display(),
                e
            );
            EntryCacheError::cache_directory_creation_failed(&self.cache_dir, e)
        })
    }

    /// Whether a persisted entry exists for `key`.
    ///
    /// Existence is the sole signal of "already built"; no freshness check
    /// beyond key equality is performed.
    pub fn exists(&self, key: &CacheKey) -> bool {
        self.entry_path(key).is_file()
    }

    /// Load the list named `selection_name` from the entry for `key`.
    ///
    /// Distinguishes three failures: `CacheEntryNotFound` when there is no
    /// container, `CacheReadFailed` on I/O errors, and `CacheCorrupt` when
    /// the container exists but cannot be parsed or stores a list under a
    /// different name.
    pub fn load(&self, key: &CacheKey, selection_name: &str) -> Result<EntryList> {
        let path = self.entry_path(key);
        log::debug!("Loading entry list from '{}'", path.display());

        if !path.exists() {
            return Err(EntryCacheError::cache_entry_not_found(&path));
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read cache entry '{}': {}", path.display(), e);
            EntryCacheError::cache_read_failed(&path, e)
        })?;

        let entry: CacheEntry = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse cache entry '{}': {}", path.display(), e);
            EntryCacheError::cache_corrupt(&path, e.to_string())
        })?;

        if entry.list.name() != selection_name {
            log::error!(
                "Cache entry '{}' stores list '{}', expected '{}'",
                path.display(),
                entry.list.name(),
                selection_name
            );
            return Err(EntryCacheError::cache_corrupt(
                &path,
                format!(
                    "stored list is named '{}', expected '{}'",
                    entry.list.name(),
                    selection_name
                ),
            ));
        }

        log::debug!(
            "Loaded {} indices for '{}' from '{}'",
            entry.list.len(),
            selection_name,
            path.display()
        );
        Ok(entry.list)
    }

    /// Write a fresh container for `key`, overwriting any existing one.
    ///
    /// `dataset_label` is the identity string the list was built against,
    /// stored for diagnostics only.
    pub fn save(&self, key: &CacheKey, list: &EntryList, dataset_label: &str) -> Result<()> {
        self.ensure_directory()?;

        let path = self.entry_path(key);
        let entry = CacheEntry {
            list: list.clone(),
            dataset: dataset_label.to_string(),
            written_at: SystemTime::now(),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(EntryCacheError::cache_serialization_failed)?;

        fs::write(&path, json).map_err(|e| {
            log::error!("Failed to write cache entry '{}': {}", path.display(), e);
            EntryCacheError::cache_write_failed(&path, e)
        })?;

        log::info!(
            "Wrote entry list for '{}' ({} indices) to '{}'",
            list.name(),
            list.len(),
            path.display()
        );
        Ok(())
    }

    /// Remove the persisted entry for `key` if present. No-op when absent.
    pub fn delete(&self, key: &CacheKey) -> Result<()> {
        let path = self.entry_path(key);
        if !path.exists() {
            log::debug!("No cache entry to delete at '{}'", path.display());
            return Ok(());
        }
        fs::remove_file(&path)?;
        log::info!("Deleted cache entry '{}'", path.display());
        Ok(())
    }
}
