//! Cache key derivation.
//!
//! A [`CacheKey`] is the sole cache-addressing mechanism: an md5 hex digest
//! of the selection identity (name + predicate text) concatenated with the
//! dataset identity (logical name + ordered source file names). Any change
//! to any of those inputs, including file order, yields a different digest
//! and therefore a different on-disk entry.
//!
//! Derivation is pure and performs no I/O. The dataset's file list is read
//! at call time so that newly added files are always part of the key.

use crate::core::dataset::DatasetReader;
use crate::core::selection::Selection;

/// Stable cache address for one (selection, dataset identity) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    selection: String,
    digest: String,
}

impl CacheKey {
    /// Derive the key for `selection` over the dataset behind `reader`.
    pub fn derive<R: DatasetReader>(selection: &Selection, reader: &R) -> Self {
        let identity = identity_string(selection, reader);
        Self {
            selection: selection.name().to_string(),
            digest: format!("{:x}", md5::compute(identity.as_bytes())),
        }
    }

    /// Hex digest of the full identity string.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// File name of the persisted entry: `<selection>_<digest>.json`.
    ///
    /// The selection-name component is sanitized for path safety only; the
    /// digest always hashes the raw name.
    pub fn file_name(&self) -> String {
        format!("{}_{}.json", sanitize(&self.selection), self.digest)
    }
}

/// Encode a selection plus the current dataset identity in one string.
///
/// Also used verbatim as the diagnostic label stored alongside newly built
/// lists.
pub fn identity_string<R: DatasetReader>(selection: &Selection, reader: &R) -> String {
    let mut s = String::new();
    s.push_str(selection.name());
    s.push_str(selection.predicate());
    s.push_str(reader.dataset_name());
    for file in reader.source_files() {
        s.push_str(&file);
    }
    s
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
