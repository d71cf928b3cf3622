//! Config serialization to TOML
//!
//! Single source of truth for the config file format. `config --reset` and
//! first-run template creation both go through `to_toml()`.

use super::Config;

impl Config {
    /// Render the full commented config template with current values
    pub fn to_toml(&self) -> String {
        format!(
            r#"# tally configuration

# Theme: Dark, Light, Monokai, Dracula, Nord, Solarized
# Cycle at runtime with '[' and ']'
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Maximum calculation tape entries kept in memory
tape_limit = {tape_limit}

# Feature flags
[features]
tape = {tape}
logs_panel = {logs_panel}
clipboard = {clipboard}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app logs panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            tape_limit = self.tape_limit,
            tape = self.features.tape,
            logs_panel = self.features.logs_panel,
            clipboard = self.features.clipboard,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
