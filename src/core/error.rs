//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`EntryCacheError`] which covers every failure mode of
//! the entry cache. It uses `thiserror` for ergonomic error definitions and
//! provides constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`EntryCacheError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, EntryCacheError>`
//!
//! # Error Categories
//! - **Cache directory**: Invalid path, creation failures
//! - **Cache entries**: Not found, unreadable, corrupt containers
//! - **Registry misuse**: Unregistered selections, appends to loaded lists
//!
//! A corrupt container is deliberately distinct from a missing one: callers
//! must be able to tell "never built" apart from "built but damaged" so they
//! can delete-and-rebuild instead of silently using wrong data.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for the entry cache
#[derive(Error, Debug)]
pub enum EntryCacheError {
    // Cache directory errors
    #[error("Invalid cache directory: '{path}' exists but is not a directory")]
    InvalidCacheDirectory { path: PathBuf },

    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Cache entry errors
    #[error("No cache entry at '{path}'")]
    CacheEntryNotFound { path: PathBuf },

    #[error("Failed to read cache entry '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write cache entry '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize entry list: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Corrupt cache entry '{path}': {detail}")]
    CacheCorrupt { path: PathBuf, detail: String },

    // Registry misuse errors
    #[error("Selection '{name}' is not registered; call retrieve() first")]
    SelectionNotRegistered { name: String },

    #[error("Entry list for '{name}' was loaded from cache and is read-only")]
    ListIsReadOnly { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using EntryCacheError
pub type Result<T> = std::result::Result<T, EntryCacheError>;

impl EntryCacheError {
    /// Create an invalid cache directory error
    pub fn invalid_cache_directory(path: impl Into<PathBuf>) -> Self {
        Self::InvalidCacheDirectory { path: path.into() }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache entry not found error
    pub fn cache_entry_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CacheEntryNotFound { path: path.into() }
    }

    /// Create a cache read failed error
    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a corrupt cache entry error
    pub fn cache_corrupt(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::CacheCorrupt {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Create a selection not registered error
    pub fn selection_not_registered(name: impl Into<String>) -> Self {
        Self::SelectionNotRegistered { name: name.into() }
    }

    /// Create a read-only list error
    pub fn list_is_read_only(name: impl Into<String>) -> Self {
        Self::ListIsReadOnly { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cache_directory_display() {
        let err = EntryCacheError::invalid_cache_directory("/some/file.txt");
        assert_eq!(
            err.to_string(),
            "Invalid cache directory: '/some/file.txt' exists but is not a directory"
        );
    }

    #[test]
    fn test_cache_entry_not_found_display() {
        let err = EntryCacheError::cache_entry_not_found("/cache/even_abc.json");
        assert!(err.to_string().contains("/cache/even_abc.json"));
        assert!(err.to_string().contains("No cache entry"));
    }

    #[test]
    fn test_cache_corrupt_display() {
        let err = EntryCacheError::cache_corrupt("/cache/x.json", "stored list is named 'odd'");
        assert!(err.to_string().contains("Corrupt cache entry"));
        assert!(err.to_string().contains("stored list is named 'odd'"));
    }

    #[test]
    fn test_cache_read_failed_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = EntryCacheError::cache_read_failed("/cache/x.json", io_err);
        assert!(err.to_string().contains("/cache/x.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_cache_write_failed_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no space left");
        let err = EntryCacheError::cache_write_failed("/cache/x.json", io_err);
        assert!(err.to_string().contains("/cache/x.json"));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_list_is_read_only_display() {
        let err = EntryCacheError::list_is_read_only("even");
        assert!(err.to_string().contains("'even'"));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_selection_not_registered_display() {
        let err = EntryCacheError::selection_not_registered("missing");
        assert!(err.to_string().contains("'missing'"));
        assert!(err.to_string().contains("retrieve()"));
    }
}
