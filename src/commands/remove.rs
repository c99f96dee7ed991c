use crate::core::{print_info, print_success, Registry, Result};
use std::path::Path;

/// Remove a directory from the search index. Removing a path that is not in
/// the index is a no-op, not an error.
pub fn execute_remove(dir: &Path) -> Result<()> {
    let mut registry = Registry::load_default()?;
    if registry.remove(dir)? {
        print_success(&format!("Search path {} removed", dir.display()));
    } else {
        print_info(&format!(
            "Search path {} was not in the search index",
            dir.display()
        ));
    }
    Ok(())
}
