//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/tally/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;

mod features;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Monokai", "Dracula", "Nord", "Solarized"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Maximum tape entries kept in memory
    pub tape_limit: usize,

    /// Feature flags for optional panels
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            use_theme_background: true,
            tape_limit: 200,
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub tape_limit: Option<usize>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/tally/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tally").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed is a fatal error -
    /// failing fast with a clear message beats silently falling back to
    /// defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse configuration file\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {e}\n");
                    eprintln!("  To reset, run `tally config --reset` or delete the file.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read configuration file\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {e}\n");
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::from_file_config(Self::load_file_config())
    }

    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = std::env::var("TALLY_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Background toggle: file > default
        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        // Tape limit: env > file > default
        let tape_limit = std::env::var("TALLY_TAPE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.tape_limit)
            .unwrap_or(defaults.tape_limit);

        let features = Features::from_file(file.features);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            use_theme_background,
            tape_limit,
            features,
            logging,
        }
    }
}
