//! Two-mode dataset traversal.
//!
//! [`IndexedScan`] drives one pass over a dataset either linearly (every
//! record position in `[0, total_records)`, used while building new entry
//! lists) or as an indexed replay (only the positions in a previously built
//! list, in stored order).
//!
//! The engine is a pull-based cursor: each [`IndexedScan::advance`] call
//! seeks-and-loads one record and yields its position, then hands control
//! back to the caller, which can inspect the loaded record, evaluate
//! predicates and feed `add_entry` before pulling again. Ceasing to pull is
//! cancellation; the cursor is not restartable mid-stream, a new `preselect`
//! starts a fresh pass.

use crate::core::dataset::DatasetReader;
use crate::core::registry::SelectionRegistry;
use crate::core::selection::Selection;

#[derive(Debug)]
enum ScanMode {
    /// No active list: visit every position in order.
    Linear { next: u64, total: u64 },
    /// Active list: visit exactly the stored positions, in stored order.
    Replay { indices: Vec<u64>, pos: usize },
}

/// Traversal engine over one dataset, in linear or replay mode.
#[derive(Debug)]
pub struct IndexedScan {
    mode: ScanMode,
}

impl IndexedScan {
    /// Fresh scan in linear mode.
    pub fn new<R: DatasetReader>(reader: &R) -> Self {
        Self {
            mode: ScanMode::Linear {
                next: 0,
                total: reader.total_records(),
            },
        }
    }

    /// Configure the next pass.
    ///
    /// `None` selects a linear scan. `Some(selection)` selects replay of the
    /// list the registry loaded for that selection; if no cached list is
    /// bound, the scan degrades to linear with a warning and the caller must
    /// evaluate this selection during a linear pass instead.
    pub fn preselect<R: DatasetReader>(
        &mut self,
        selection: Option<&Selection>,
        registry: &SelectionRegistry,
        reader: &R,
    ) {
        let total = reader.total_records();
        match selection {
            Some(sel) => match registry.cached_list(sel) {
                Some(list) => {
                    log::info!(
                        "Preselected {} records (out of {}) for '{}'",
                        list.len(),
                        total,
                        sel.name()
                    );
                    self.mode = ScanMode::Replay {
                        indices: list.indices().to_vec(),
                        pos: 0,
                    };
                }
                None => {
                    log::warn!(
                        "Requested entry list for '{}' not available; falling back to linear scan",
                        sel.name()
                    );
                    self.mode = ScanMode::Linear { next: 0, total };
                }
            },
            None => {
                log::info!("No preselection: {} records", total);
                self.mode = ScanMode::Linear { next: 0, total };
            }
        }
    }

    /// Size of the active replay list, or 0 in linear mode.
    pub fn num_preselected(&self) -> u64 {
        match &self.mode {
            ScanMode::Replay { indices, .. } => indices.len() as u64,
            ScanMode::Linear { .. } => 0,
        }
    }

    /// Advance the cursor, load the record at the new position and yield it.
    ///
    /// Returns `None` once the cursor is exhausted. A position the reader
    /// cannot load ends the pass early with a warning; the indices are
    /// misaligned with the data in that case and continuing would replay
    /// garbage.
    pub fn advance<R: DatasetReader>(&mut self, reader: &mut R) -> Option<u64> {
        let position = match &mut self.mode {
            ScanMode::Linear { next, total } => {
                if *next >= *total {
                    return None;
                }
                let position = *next;
                *next += 1;
                position
            }
            ScanMode::Replay { indices, pos } => {
                if *pos >= indices.len() {
                    return None;
                }
                let position = indices[*pos];
                *pos += 1;
                position
            }
        };

        if !reader.seek_and_load(position) {
            log::warn!(
                "Record {} could not be loaded; index runs beyond data size, stopping iteration",
                position
            );
            self.exhaust();
            return None;
        }
        Some(position)
    }

    fn exhaust(&mut self) {
        match &mut self.mode {
            ScanMode::Linear { next, total } => *next = *total,
            ScanMode::Replay { indices, pos } => *pos = indices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::MemoryDataset;
    use crate::core::store::CacheStore;
    use tempfile::TempDir;

    fn dataset(n: u64) -> MemoryDataset {
        MemoryDataset::sequential("physics", "run1.dat", n)
    }

    fn even() -> Selection {
        Selection::new("even", "x % 2 == 0")
    }

    /// Registry with a persisted even-entries list over `n` records.
    fn registry_with_even_list(temp: &TempDir, n: u64) -> (SelectionRegistry, MemoryDataset) {
        let ds = dataset(n);

        let mut builder = SelectionRegistry::new(CacheStore::new(temp.path()));
        builder.retrieve(&[even()], &ds).unwrap();
        for i in (0..n).step_by(2) {
            builder.add_entry(&even(), i).unwrap();
        }
        builder.save().unwrap();

        let mut reg = SelectionRegistry::new(CacheStore::new(temp.path()));
        reg.retrieve(&[even()], &ds).unwrap();
        (reg, ds)
    }

    #[test]
    fn test_linear_scan_visits_every_position() {
        let mut ds = dataset(5);
        let mut scan = IndexedScan::new(&ds);
        assert_eq!(scan.num_preselected(), 0);

        let mut seen = Vec::new();
        while let Some(pos) = scan.advance(&mut ds) {
            seen.push(pos);
            assert_eq!(ds.value(), Some(pos as i64));
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);

        // Exhausted cursor stays exhausted
        assert_eq!(scan.advance(&mut ds), None);
    }

    #[test]
    fn test_replay_visits_stored_positions_in_order() {
        let temp = TempDir::new().unwrap();
        let (reg, mut ds) = registry_with_even_list(&temp, 10);

        let mut scan = IndexedScan::new(&ds);
        scan.preselect(Some(&even()), &reg, &ds);
        assert_eq!(scan.num_preselected(), 5);

        let mut seen = Vec::new();
        while let Some(pos) = scan.advance(&mut ds) {
            seen.push(pos);
        }
        assert_eq!(seen, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_preselect_none_returns_to_linear() {
        let temp = TempDir::new().unwrap();
        let (reg, mut ds) = registry_with_even_list(&temp, 4);

        let mut scan = IndexedScan::new(&ds);
        scan.preselect(Some(&even()), &reg, &ds);
        assert_eq!(scan.num_preselected(), 2);

        scan.preselect(None, &reg, &ds);
        assert_eq!(scan.num_preselected(), 0);

        let mut count = 0;
        while scan.advance(&mut ds).is_some() {
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_preselect_without_cached_list_degrades_to_linear() {
        let temp = TempDir::new().unwrap();
        let ds0 = dataset(3);
        let mut reg = SelectionRegistry::new(CacheStore::new(temp.path()));
        reg.retrieve(&[even()], &ds0).unwrap();

        let mut ds = ds0.clone();
        let mut scan = IndexedScan::new(&ds);
        scan.preselect(Some(&even()), &reg, &ds);

        // Degraded: linear over all 3 records
        assert_eq!(scan.num_preselected(), 0);
        let mut count = 0;
        while scan.advance(&mut ds).is_some() {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_preselect_unknown_selection_degrades_to_linear() {
        let temp = TempDir::new().unwrap();
        let (reg, mut ds) = registry_with_even_list(&temp, 4);

        let stranger = Selection::new("stranger", "x < 0");
        let mut scan = IndexedScan::new(&ds);
        scan.preselect(Some(&stranger), &reg, &ds);

        assert_eq!(scan.num_preselected(), 0);
        let mut count = 0;
        while scan.advance(&mut ds).is_some() {
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_replay_stops_when_record_cannot_be_loaded() {
        let temp = TempDir::new().unwrap();
        let (reg, ds) = registry_with_even_list(&temp, 10);

        // Shrunk dataset with the same identity: indices 6 and 8 now point
        // beyond the data
        let mut shrunk = MemoryDataset::new(
            "physics",
            vec!["run1.dat".into()],
            (0..5).collect(),
        );

        let mut scan = IndexedScan::new(&ds);
        scan.preselect(Some(&even()), &reg, &ds);

        let mut seen = Vec::new();
        while let Some(pos) = scan.advance(&mut shrunk) {
            seen.push(pos);
        }
        assert_eq!(seen, vec![0, 2, 4]);
        assert_eq!(scan.advance(&mut shrunk), None);
    }

    #[test]
    fn test_empty_dataset_yields_nothing() {
        let mut ds = dataset(0);
        let mut scan = IndexedScan::new(&ds);
        assert_eq!(scan.advance(&mut ds), None);
    }
}
