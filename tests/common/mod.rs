//! Consolidated test utilities for dirscout
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real registry files and directory trees in temp directories.

pub mod fixtures;
