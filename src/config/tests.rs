//! Configuration tests
//!
//! Round-trip and precedence guards: when a new config field is added,
//! these fail until the field is wired through FileConfig, from_file_config
//! and to_toml.

use super::*;

/// Verify that the serialized template parses back.
/// Catches TOML syntax errors in the commented template.
#[test]
fn default_config_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Every top-level field survives the template round-trip
#[test]
fn template_preserves_values() {
    let mut config = Config::default();
    config.theme = "Nord".to_string();
    config.use_theme_background = false;
    config.tape_limit = 50;
    config.features.tape = false;
    config.logging.level = "debug".to_string();
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let reloaded = Config::from_file_config(parsed);

    assert_eq!(reloaded.theme, "Nord");
    assert!(!reloaded.use_theme_background);
    assert_eq!(reloaded.tape_limit, 50);
    assert!(!reloaded.features.tape);
    assert_eq!(reloaded.logging.level, "debug");
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

/// File values override defaults; missing sections fall back
#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Monokai"
tape_limit = 10

[logging]
level = "trace"
"#,
    )
    .unwrap();

    let config = Config::from_file_config(file);
    assert_eq!(config.theme, "Monokai");
    assert_eq!(config.tape_limit, 10);
    assert_eq!(config.logging.level, "trace");

    // Unspecified values keep defaults
    assert!(config.use_theme_background);
    assert!(config.features.tape);
    assert!(!config.logging.file_enabled);
}

/// An empty file is valid and yields pure defaults
#[test]
fn empty_file_yields_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::from_file_config(file);
    assert_eq!(config.theme, Config::default().theme);
    assert_eq!(config.tape_limit, Config::default().tape_limit);
}

/// Unknown rotation strings fall back to daily rather than erroring
#[test]
fn unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}
