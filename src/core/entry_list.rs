//! Ordered lists of record indices.
//!
//! An [`EntryList`] holds the indices of the records that satisfied one
//! selection, in the order a single forward pass visited them. The list is
//! append-only: the builder pushes each matching index exactly once, in
//! increasing order, and the cache never reorders or deduplicates.

use serde::{Deserialize, Serialize};

/// Ordered sequence of record indices satisfying one selection.
///
/// Scoped to one (selection, dataset identity) pair via the cache key that
/// addresses it on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryList {
    name: String,
    indices: Vec<u64>,
}

impl EntryList {
    /// Create an empty list named after its selection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indices: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a matching record index. Caller guarantees increasing order
    /// and at most one call per index within a pass.
    pub fn push(&mut self, index: u64) {
        self.indices.push(index);
    }

    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
