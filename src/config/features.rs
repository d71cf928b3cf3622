//! Feature flags configuration
//!
//! Feature flags for optional panels (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional panels (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Calculation tape panel
    pub tape: bool,

    /// System logs panel (toggled with 'l')
    pub logs_panel: bool,

    /// Clipboard copy of display/tape
    pub clipboard: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            tape: true,
            logs_panel: true,
            clipboard: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub tape: Option<bool>,
    pub logs_panel: Option<bool>,
    pub clipboard: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            tape: file.tape.unwrap_or(true),
            logs_panel: file.logs_panel.unwrap_or(true),
            clipboard: file.clipboard.unwrap_or(true),
        }
    }
}
