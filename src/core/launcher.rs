//! Detached launch of the platform file browser.
//!
//! The `open` crate picks the right launcher per platform (`explorer`,
//! `open`, `xdg-open` and friends). The launch is fire-and-forget: the child
//! is detached, never awaited, never tracked.

use crate::core::error::Result;
use std::path::Path;

/// Open a directory in the OS file browser and return immediately.
pub fn open_in_file_browser(path: &Path) -> Result<()> {
    log::debug!("Launching file browser for {}", path.display());
    open::that_detached(path)?;
    Ok(())
}
