//! Delete the cached entry lists of the demo selections.

use crate::core::{error::Result, output::print_success, CacheStore, SelectionRegistry};
use std::path::Path;

use super::run::{demo_dataset, demo_selections};

pub fn execute_clear(records: u64, cache_dir: &Path) -> Result<()> {
    let dataset = demo_dataset(records);
    let selections = demo_selections();

    let registry = SelectionRegistry::new(CacheStore::new(cache_dir));
    registry.clear(&selections, &dataset)?;

    print_success(&format!(
        "Cleared cached entry lists for {} selection(s)",
        selections.len()
    ));
    Ok(())
}
