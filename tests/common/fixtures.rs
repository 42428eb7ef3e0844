//! Test data generation utilities and predefined scenarios
//!
//! Provides datasets, selections and cache setups used across the
//! integration tests.

#![allow(dead_code)]

use entry_cache::core::{
    CacheStore, DatasetReader, IndexedScan, MemoryDataset, Result, Selection, SelectionRegistry,
};
use tempfile::TempDir;

/// A cache directory that lives for the duration of one test.
pub struct TestCache {
    pub temp_dir: TempDir,
}

impl TestCache {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp cache dir"),
        }
    }

    pub fn store(&self) -> CacheStore {
        CacheStore::new(self.temp_dir.path())
    }

    pub fn registry(&self) -> SelectionRegistry {
        SelectionRegistry::new(self.store())
    }

    /// Number of persisted cache entries currently on disk.
    pub fn entry_count(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path())
            .map(|d| d.count())
            .unwrap_or(0)
    }
}

/// Dataset with records `x = 0..n` from a single source file.
pub fn dataset(n: u64) -> MemoryDataset {
    MemoryDataset::sequential("physics", "run1.dat", n)
}

pub fn even_selection() -> Selection {
    Selection::new("even", "x % 2 == 0")
}

pub fn odd_selection() -> Selection {
    Selection::new("odd", "x % 2 != 0")
}

/// Evaluate a fixture selection against a record value, the way a caller
/// would during a linear pass.
pub fn evaluate(selection: &Selection, x: i64) -> bool {
    match selection.name() {
        "even" => x % 2 == 0,
        "odd" => x % 2 != 0,
        _ => panic!("unknown fixture selection '{}'", selection.name()),
    }
}

/// Scenario: run one full linear pass that builds and persists the entry
/// lists for `selections` over `dataset`. Returns per-selection pass counts
/// in the same order.
pub fn build_and_save(
    cache: &TestCache,
    dataset: &mut MemoryDataset,
    selections: &[Selection],
) -> Result<Vec<u64>> {
    let mut registry = cache.registry();
    registry.retrieve(selections, dataset)?;

    let mut counts = vec![0u64; selections.len()];
    let mut scan = IndexedScan::new(dataset);
    scan.preselect(None, &registry, dataset);
    while let Some(position) = scan.advance(dataset) {
        let x = dataset.value().expect("record loaded");
        for (i, selection) in selections.iter().enumerate() {
            if evaluate(selection, x) {
                counts[i] += 1;
                registry.add_entry(selection, position)?;
            }
        }
    }
    registry.save()?;
    Ok(counts)
}

/// Count the records a replay of `selection`'s cached list visits.
pub fn replay_count(
    registry: &SelectionRegistry,
    dataset: &mut MemoryDataset,
    selection: &Selection,
) -> u64 {
    let mut scan = IndexedScan::new(dataset);
    scan.preselect(Some(selection), registry, dataset);
    let mut count = 0;
    while scan.advance(dataset).is_some() {
        count += 1;
    }
    count
}

/// Sanity check the fixture dataset itself.
pub fn assert_dataset_shape(ds: &MemoryDataset, n: u64) {
    assert_eq!(ds.total_records(), n);
    assert_eq!(ds.dataset_name(), "physics");
}
