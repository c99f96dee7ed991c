//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating registry files and directory trees with
//! specific shapes to test the CLI consistently.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A registry file plus the temp directory everything lives in.
pub struct TestRegistry {
    pub dir: TempDir,
    pub config: PathBuf,
}

/// Registry file with an empty index.
pub fn empty_registry() -> anyhow::Result<TestRegistry> {
    registry_with_roots(&[])
}

/// Registry file listing the given roots, in order.
pub fn registry_with_roots(roots: &[&Path]) -> anyhow::Result<TestRegistry> {
    let dir = TempDir::new()?;
    let config = dir.path().join("config.json");
    let index: Vec<String> = roots
        .iter()
        .map(|r| r.to_string_lossy().into_owned())
        .collect();
    fs::write(
        &config,
        serde_json::to_string_pretty(&serde_json::json!({ "index": index }))?,
    )?;
    Ok(TestRegistry { dir, config })
}

/// Read the index back out of a registry file.
pub fn read_index(config: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(config)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(value["index"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default())
}

/// Scenario: a search root with the given child directories.
pub fn root_with_children(parent: &Path, names: &[&str]) -> anyhow::Result<PathBuf> {
    let root = parent.join("projects");
    fs::create_dir(&root)?;
    for name in names {
        fs::create_dir(root.join(name))?;
    }
    Ok(root)
}
