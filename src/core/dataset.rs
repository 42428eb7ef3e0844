//! Dataset reader abstraction.
//!
//! The cache depends only on the narrow [`DatasetReader`] capability trait;
//! any concrete record store that can report its size and identity and seek
//! to a record position can be plugged in. [`MemoryDataset`] is a synthetic
//! in-memory implementation used by the demo driver and the test suites.

/// Minimal reader capability the cache requires from the underlying record
/// store.
///
/// `source_files` and `dataset_name` together form the dataset identity that
/// flows into cache keys: the ordered source file names plus the logical
/// dataset name. `source_files` must reflect the current file list on every
/// call; a stale copy would silently omit newly added files from the key.
pub trait DatasetReader {
    /// Total number of records currently in the dataset.
    fn total_records(&self) -> u64;

    /// Position on `index` and load that record as the current one.
    /// Returns false when nothing could be read.
    fn seek_and_load(&mut self, index: u64) -> bool;

    /// Ordered source file names composing the dataset. Order matters.
    fn source_files(&self) -> Vec<String>;

    /// Logical dataset name (e.g. tree or chain name).
    fn dataset_name(&self) -> &str;
}

/// Synthetic in-memory dataset: one `i64` value per record.
///
/// Stands in for a real file-backed store in the demo driver and tests.
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    name: String,
    files: Vec<String>,
    values: Vec<i64>,
    current: Option<i64>,
}

impl MemoryDataset {
    pub fn new(name: impl Into<String>, files: Vec<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            files,
            values,
            current: None,
        }
    }

    /// Dataset with records `x = 0..n`, attributed to a single source file.
    pub fn sequential(name: impl Into<String>, file: impl Into<String>, n: u64) -> Self {
        Self::new(name, vec![file.into()], (0..n as i64).collect())
    }

    /// Value of the most recently loaded record.
    ///
    /// Returns `None` before the first successful `seek_and_load`.
    pub fn value(&self) -> Option<i64> {
        self.current
    }

    /// Append another source file's worth of records.
    pub fn add_file(&mut self, file: impl Into<String>, values: Vec<i64>) {
        self.files.push(file.into());
        self.values.extend(values);
    }
}

impl DatasetReader for MemoryDataset {
    fn total_records(&self) -> u64 {
        self.values.len() as u64
    }

    fn seek_and_load(&mut self, index: u64) -> bool {
        match self.values.get(index as usize) {
            Some(&v) => {
                self.current = Some(v);
                true
            }
            None => false,
        }
    }

    fn source_files(&self) -> Vec<String> {
        self.files.clone()
    }

    fn dataset_name(&self) -> &str {
        &self.name
    }
}
