//! Core functionality of the entry cache.
//!
//! This module provides the building blocks for per-selection entry-list
//! caching: key derivation, the filesystem store, the per-run registry and
//! the two-mode traversal engine.

pub mod dataset;
pub mod entry_list;
pub mod error;
pub mod key;
pub mod output;
pub mod registry;
pub mod scan;
pub mod selection;
pub mod store;

// === Error handling ===
// Core error types and result type used throughout the crate
pub use error::{EntryCacheError, Result};

// === Selection identity ===
// Named predicates; predicate text is opaque cache-key material
pub use selection::Selection;

// === Dataset access ===
// The narrow reader capability the cache depends on
pub use dataset::{DatasetReader, MemoryDataset};

// === Entry lists ===
// Ordered record-index lists, one per (selection, dataset) pair
pub use entry_list::EntryList;

// === Cache keys ===
// Stable digests addressing persisted entries
pub use key::CacheKey;

// === Persistence ===
// Filesystem-backed load/save/delete of entry-list containers
pub use store::CacheStore;

// === Per-run bookkeeping ===
// Retrieval, cached/uncached partitioning and list building
pub use registry::{ListSource, SelectionRegistry};

// === Traversal ===
// Linear scan and indexed replay over a dataset
pub use scan::IndexedScan;

// === Output formatting ===
// CLI presentation helpers for the demo driver
pub use output::{print_error, print_info, print_success};
