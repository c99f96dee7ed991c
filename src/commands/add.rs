use crate::core::{print_success, Registry, Result};
use std::path::Path;

/// Add a directory to the search index and persist the registry.
pub fn execute_add(dir: &Path) -> Result<()> {
    let mut registry = Registry::load_default()?;
    registry.add(dir)?;
    print_success(&format!("Search path {} added", dir.display()));
    Ok(())
}
