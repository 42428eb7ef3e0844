//! Per-run selection bookkeeping.
//!
//! The [`SelectionRegistry`] tracks, for every selection registered in a run,
//! whether a cached entry list existed at retrieval time and holds the
//! in-memory list: either loaded from disk (a read-only replay source) or
//! empty and accumulating indices through [`SelectionRegistry::add_entry`]
//! during a linear pass.
//!
//! # Public API
//! - [`SelectionRegistry`]: retrieve, partition queries, add_entry, save, clear
//! - [`ListSource`]: whether a list was loaded from cache or built this run
//!
//! Classification is fixed at retrieval time. `clear` only touches the disk;
//! re-classifying after a clear requires a fresh registry (or a fresh
//! `retrieve`), otherwise a stale "has list" flag would keep replaying a
//! deleted entry from memory.

use std::collections::HashMap;

use crate::core::dataset::DatasetReader;
use crate::core::entry_list::EntryList;
use crate::core::error::{EntryCacheError, Result};
use crate::core::key::{identity_string, CacheKey};
use crate::core::selection::Selection;
use crate::core::store::CacheStore;

/// Where a selection's in-memory entry list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Loaded from a persisted cache entry. Read-only replay source.
    Loaded,
    /// Created empty this run; populated via `add_entry` during one linear
    /// pass.
    New,
}

#[derive(Debug)]
struct SelectionRecord {
    key: CacheKey,
    list: EntryList,
    source: ListSource,
    /// Identity string the list is scoped to. Diagnostics only.
    dataset_label: String,
}

impl SelectionRecord {
    fn has_existing_list(&self) -> bool {
        self.source == ListSource::Loaded
    }
}

/// Tracks cached/uncached selections for one run over one dataset.
pub struct SelectionRegistry {
    store: CacheStore,
    selections: Vec<Selection>,
    records: HashMap<Selection, SelectionRecord>,
    total_records: u64,
}

impl SelectionRegistry {
    pub fn new(store: CacheStore) -> Self {
        Self {
            store,
            selections: Vec::new(),
            records: HashMap::new(),
            total_records: 0,
        }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Register `selections` and classify each as cached or to-be-built.
    ///
    /// For every selection: derive its key, probe the store, and either load
    /// the persisted list or create an empty one. Idempotent: retrieving the
    /// same selections again without intervening mutation reproduces the
    /// same classification.
    ///
    /// A corrupt persisted entry is surfaced as an error, not treated as
    /// absent; delete it (`clear`) to rebuild.
    pub fn retrieve<R: DatasetReader>(
        &mut self,
        selections: &[Selection],
        reader: &R,
    ) -> Result<()> {
        self.store.ensure_directory()?;
        self.selections = selections.to_vec();
        self.records = HashMap::new();
        self.total_records = reader.total_records();

        for selection in selections {
            let key = CacheKey::derive(selection, reader);
            let dataset_label = identity_string(selection, reader);

            let (list, source) = if self.store.exists(&key) {
                let list = self.store.load(&key, selection.name())?;
                log::info!(
                    "Retrieved entry list for '{}' ({} indices) from '{}'",
                    selection.name(),
                    list.len(),
                    self.store.entry_path(&key).display()
                );
                (list, ListSource::Loaded)
            } else {
                log::info!("Creating entry list for '{}'", selection.name());
                (EntryList::new(selection.name()), ListSource::New)
            };

            self.records.insert(
                selection.clone(),
                SelectionRecord {
                    key,
                    list,
                    source,
                    dataset_label,
                },
            );
        }
        Ok(())
    }

    /// Selections whose entry list existed on disk at retrieval time, in
    /// registration order.
    pub fn selections_with_list(&self) -> Vec<&Selection> {
        self.partition(true)
    }

    /// Selections that need a linear pass to build their list, in
    /// registration order.
    pub fn selections_without_list(&self) -> Vec<&Selection> {
        self.partition(false)
    }

    fn partition(&self, with_list: bool) -> Vec<&Selection> {
        self.selections
            .iter()
            .filter(|s| {
                self.records
                    .get(s)
                    .map(|r| r.has_existing_list() == with_list)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// The cached entry list bound to `selection`, if one was loaded at
    /// retrieval time.
    pub fn cached_list(&self, selection: &Selection) -> Option<&EntryList> {
        self.records
            .get(selection)
            .filter(|r| r.has_existing_list())
            .map(|r| &r.list)
    }

    /// The in-memory entry list for `selection`, loaded or under
    /// construction.
    pub fn entry_list(&self, selection: &Selection) -> Option<&EntryList> {
        self.records.get(selection).map(|r| &r.list)
    }

    /// Append `index` to the list being built for `selection`.
    ///
    /// The caller evaluates the selection's predicate during the linear pass
    /// and reports each match here, at most once per index, in increasing
    /// order. Appending to a loaded list is an error; an index beyond the
    /// dataset size at retrieval time is dropped with a warning.
    pub fn add_entry(&mut self, selection: &Selection, index: u64) -> Result<()> {
        let record = self
            .records
            .get_mut(selection)
            .ok_or_else(|| EntryCacheError::selection_not_registered(selection.name()))?;

        if record.has_existing_list() {
            return Err(EntryCacheError::list_is_read_only(selection.name()));
        }

        if index >= self.total_records {
            log::warn!(
                "Index {} for '{}' is beyond dataset size {}; dropping",
                index,
                selection.name(),
                self.total_records
            );
            return Ok(());
        }

        record.list.push(index);
        Ok(())
    }

    /// Persist every list built this run.
    ///
    /// Selections that already had a cached list at retrieval time are never
    /// re-saved; their persisted entry stays untouched.
    pub fn save(&self) -> Result<()> {
        for selection in &self.selections {
            let record = match self.records.get(selection) {
                Some(r) if !r.has_existing_list() => r,
                _ => continue,
            };
            self.store
                .save(&record.key, &record.list, &record.dataset_label)?;
        }
        Ok(())
    }

    /// Delete the persisted entries for `selections`.
    ///
    /// Disk only: in-memory records keep their retrieval-time classification,
    /// so retrieve again (or build a fresh registry) before relying on the
    /// partitions.
    pub fn clear<R: DatasetReader>(&self, selections: &[Selection], reader: &R) -> Result<()> {
        if selections.is_empty() {
            log::info!("clear() called without selections; nothing to do");
            return Ok(());
        }
        for selection in selections {
            let key = CacheKey::derive(selection, reader);
            self.store.delete(&key)?;
        }
        Ok(())
    }
}
