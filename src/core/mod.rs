//! Core functionality for the dirscout tool.
//!
//! This module provides the registry persistence, entry collection, search
//! matching, launcher, and terminal building blocks the commands compose.

pub mod collector;
pub mod error;
pub mod launcher;
pub mod output;
pub mod registry;
pub mod search;
pub mod terminal;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{DirscoutError, Result};

// === Registry ===
// Persisted list of search roots, loaded once and passed by reference
pub use registry::{Registry, RegistryFile, CONFIG_ENV_VAR};

// === Entry collection ===
// One-level subdirectory enumeration over the registry roots
pub use collector::collect_entries;

// === Search ===
// Substring matching and highlight rendering over entry names
pub use search::{entry_name, find_matches, highlight, match_name, MatchSpan, SearchHit};

// === Launcher ===
// Detached file-browser open for a selected entry
pub use launcher::open_in_file_browser;

// === Terminal session ===
// Prompt/read-line glue and screen clearing for the interactive loops
pub use terminal::{stdin_terminal, Terminal};

// === Output formatting ===
// Unified colored message helpers
pub use output::{print_error, print_info, print_section_header, print_success};
