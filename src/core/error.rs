//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DirscoutError`] which covers every failure mode of
//! dirscout operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized constructors for common failure scenarios.
//!
//! # Public API
//! - [`DirscoutError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DirscoutError>`
//!
//! # Error Categories
//! - **Path validation**: Missing paths, paths that are not directories
//! - **Registry operations**: Unreadable, unparsable, or unwritable config file
//! - **Environment**: Executable directory cannot be determined

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for dirscout
#[derive(Error, Debug)]
pub enum DirscoutError {
    // Path validation errors
    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Path is already in the search index: {path}")]
    DuplicateRoot { path: PathBuf },

    // Registry file errors
    #[error("Failed to parse registry file '{path}': {source}")]
    RegistryParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write registry file '{path}': {source}")]
    RegistryWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Environment errors
    #[error("Could not determine the directory of the running executable")]
    ExeDirUnavailable,

    // Passthrough errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DirscoutError
pub type Result<T> = std::result::Result<T, DirscoutError>;

impl DirscoutError {
    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a duplicate root error
    pub fn duplicate_root(path: impl Into<PathBuf>) -> Self {
        Self::DuplicateRoot { path: path.into() }
    }

    /// Create a registry parse failed error
    pub fn registry_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::RegistryParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a registry write failed error
    pub fn registry_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RegistryWriteFailed {
            path: path.into(),
            source,
        }
    }
}
