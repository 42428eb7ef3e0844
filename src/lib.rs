//! Entry Cache - per-selection entry-list caching for large ordered datasets.
//!
//! This library caches, per named selection, the record indices in a dataset
//! that satisfy the selection's predicate. The first pass over the data runs
//! linearly, evaluating predicates in the caller and accumulating matching
//! indices; later passes replay the persisted index lists directly, skipping
//! predicate evaluation entirely. Selections with and without a cached list
//! can be mixed freely within one run.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Selection identity and cache-key derivation
//! - Filesystem-backed entry-list persistence
//! - Per-run selection registry and list building
//! - Linear / indexed-replay dataset traversal
//! - Error handling and result types
//!
//! # Example
//! ```no_run
//! use entry_cache::core::{
//!     CacheStore, IndexedScan, MemoryDataset, Selection, SelectionRegistry,
//! };
//!
//! let mut dataset = MemoryDataset::sequential("physics", "run1.dat", 1000);
//! let even = Selection::new("even", "x % 2 == 0");
//!
//! let mut registry = SelectionRegistry::new(CacheStore::new(".entry-cache"));
//! registry.retrieve(std::slice::from_ref(&even), &dataset)?;
//!
//! // Replay selections whose list is already cached
//! for sel in registry.selections_with_list().into_iter().cloned().collect::<Vec<_>>() {
//!     let mut scan = IndexedScan::new(&dataset);
//!     scan.preselect(Some(&sel), &registry, &dataset);
//!     while let Some(_pos) = scan.advance(&mut dataset) {
//!         // use the loaded record
//!     }
//! }
//!
//! // Build lists for the rest in one linear pass
//! let pending: Vec<Selection> =
//!     registry.selections_without_list().into_iter().cloned().collect();
//! let mut scan = IndexedScan::new(&dataset);
//! scan.preselect(None, &registry, &dataset);
//! while let Some(pos) = scan.advance(&mut dataset) {
//!     let x = dataset.value().unwrap_or_default();
//!     for sel in &pending {
//!         if x % 2 == 0 {
//!             registry.add_entry(sel, pos)?;
//!         }
//!     }
//! }
//! registry.save()?;
//! # Ok::<(), entry_cache::core::EntryCacheError>(())
//! ```

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Cache keys
    CacheKey,

    // Persistence
    CacheStore,

    // Dataset access
    DatasetReader,

    // Entry lists
    EntryList,

    // Error handling
    EntryCacheError,

    // Traversal
    IndexedScan,

    ListSource,

    MemoryDataset,

    Result,

    // Selection identity
    Selection,

    // Per-run bookkeeping
    SelectionRegistry,
};
