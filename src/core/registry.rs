//! Persistent registry of search root directories.
//!
//! The registry is a flat JSON file (`config.json`) living next to the
//! running executable. It is loaded once per run into a [`Registry`] handle
//! that owns the file path and the parsed contents; all mutations go through
//! that handle and rewrite the whole file.
//!
//! # Public API
//! - [`RegistryFile`]: On-disk data model, `{"index": [...]}`
//! - [`Registry`]: Owned handle with `load_or_init`, `add`, `remove`
//!
//! The rewrite is not atomic and no lock is taken; two concurrent instances
//! can lose each other's updates. The domain is a handful of roots edited by
//! hand, so the simple whole-file model is kept.

use crate::core::error::{DirscoutError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the registry location, used by tests and by
/// users who want the config somewhere other than the executable directory.
pub const CONFIG_ENV_VAR: &str = "DIRSCOUT_CONFIG";

/// On-disk shape of the registry. Paths are stored as strings exactly as
/// they were added; removal compares by exact string equality.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RegistryFile {
    pub index: Vec<String>,
}

/// Owned handle to the registry file. Load once, pass by reference.
#[derive(Debug)]
pub struct Registry {
    path: PathBuf,
    file: RegistryFile,
}

impl Registry {
    /// Resolve the registry file location: `$DIRSCOUT_CONFIG` if set,
    /// otherwise `config.json` beside the running executable.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let exe = std::env::current_exe().map_err(|_| DirscoutError::ExeDirUnavailable)?;
        let dir = exe.parent().ok_or(DirscoutError::ExeDirUnavailable)?;
        Ok(dir.join("config.json"))
    }

    /// Load the registry from its default location, initializing it on
    /// first run with the executable's own directory as the sole root.
    pub fn load_default() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|_| DirscoutError::ExeDirUnavailable)?;
        let exe_dir = exe
            .parent()
            .ok_or(DirscoutError::ExeDirUnavailable)?
            .to_path_buf();
        Self::load_or_init(Self::config_path()?, &exe_dir)
    }

    /// Load an existing registry file. Fails if the file is missing,
    /// unreadable, or not valid JSON; parse failures are fatal here, never
    /// auto-repaired.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let file: RegistryFile = serde_json::from_str(&content)
            .map_err(|e| DirscoutError::registry_parse_failed(&path, e))?;
        log::debug!("Loaded {} roots from {}", file.index.len(), path.display());
        Ok(Self { path, file })
    }

    /// Load the registry, creating it on first run. A fresh registry starts
    /// with an empty index and then gets `initial_root` (the executable's
    /// own directory in production) added as the sole root.
    pub fn load_or_init(path: impl Into<PathBuf>, initial_root: &Path) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            return Self::open(path);
        }

        log::debug!("Registry file missing, creating {}", path.display());
        let mut registry = Self {
            path,
            file: RegistryFile::default(),
        };
        registry.save()?;
        registry.add(initial_root)?;
        Ok(registry)
    }

    /// Root paths in insertion order.
    pub fn roots(&self) -> &[String] {
        &self.file.index
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a root and rewrite the file. The path must exist and be a
    /// directory, and must not already be in the index.
    pub fn add(&mut self, dir: &Path) -> Result<()> {
        validate_directory(dir)?;
        let entry = dir.to_string_lossy().into_owned();
        if self.file.index.contains(&entry) {
            return Err(DirscoutError::duplicate_root(dir));
        }
        self.file.index.push(entry);
        self.save()
    }

    /// Remove every occurrence of a root (exact string equality) and rewrite
    /// the file. Returns `false` without touching the file when the path was
    /// not in the index. Older registries may hold duplicates, hence "every".
    pub fn remove(&mut self, dir: &Path) -> Result<bool> {
        validate_directory(dir)?;
        let entry = dir.to_string_lossy();
        let before = self.file.index.len();
        self.file.index.retain(|root| root.as_str() != entry);
        if self.file.index.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Rewrite the whole file, pretty-printed. Not transactional: a crash
    /// mid-write can leave a truncated file.
    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.file)?;
        fs::write(&self.path, content)
            .map_err(|e| DirscoutError::registry_write_failed(&self.path, e))?;
        log::debug!(
            "Wrote {} roots to {}",
            self.file.index.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn validate_directory(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DirscoutError::path_not_found(path));
        }
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_dir() {
        return Err(DirscoutError::not_a_directory(path));
    }
    Ok(())
}
