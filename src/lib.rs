//! Dirscout - an interactive directory index for the command line.
//!
//! This library provides the core functionality for dirscout: a persisted
//! registry of root directories, one-level entry collection, substring
//! search with highlighted matches, and a detached file-browser launcher.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Registry persistence (load, add, remove)
//! - Entry collection over the registry roots
//! - Search matching and highlight rendering
//! - Error handling and result types
//! - Terminal session and output helpers

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    collect_entries,
    entry_name,
    find_matches,
    highlight,
    match_name,
    open_in_file_browser,
    // Output formatting
    print_error,
    print_info,
    print_section_header,
    print_success,
    stdin_terminal,

    // Error handling
    DirscoutError,
    MatchSpan,
    // Registry
    Registry,
    RegistryFile,
    Result,
    // Search
    SearchHit,
    // Terminal session
    Terminal,

    CONFIG_ENV_VAR,
};
