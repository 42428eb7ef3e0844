//! Selection identity.
//!
//! A [`Selection`] names a predicate over dataset records. The predicate text
//! is carried purely as an opaque identity string for cache-key derivation;
//! the cache never parses or evaluates it. Evaluation happens in the caller,
//! which hands the boolean outcome to the registry via `add_entry`.

use serde::{Deserialize, Serialize};

/// A named predicate over dataset records.
///
/// Identity for caching purposes is the pair (name, predicate text). Two
/// selections that differ in either field map to different cache keys.
/// Immutable once registered for a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    name: String,
    predicate: String,
}

impl Selection {
    pub fn new(name: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: predicate.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The predicate expression text. Opaque to the cache.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}
