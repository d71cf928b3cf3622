//! Clipboard helper for copying the display value or tape
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission
/// denied. Callers surface failures as a toast, not an error.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
