//! One-level subdirectory enumeration over the registry roots.
//!
//! Produces the flat candidate list the interactive search runs against.
//! Order is deterministic per run: roots in registry order, children in
//! directory-listing order within each root.

use std::fs;
use std::path::PathBuf;

/// Collect the immediate child directories of every root. Roots that are
/// missing or unreadable are skipped with a warning; partial collection is
/// acceptable. Files are silently excluded. No recursion.
pub fn collect_entries(roots: &[String]) -> Vec<PathBuf> {
    let mut entries = Vec::new();

    for root in roots {
        let read_dir = match fs::read_dir(root) {
            Ok(rd) => rd,
            Err(e) => {
                log::warn!("Skipping root '{root}': {e}");
                continue;
            }
        };

        for child in read_dir {
            let child = match child {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under '{root}': {e}");
                    continue;
                }
            };
            match child.file_type() {
                Ok(ft) if ft.is_dir() => entries.push(child.path()),
                Ok(_) => {}
                Err(e) => log::warn!("Skipping '{}': {e}", child.path().display()),
            }
        }
    }

    entries
}
