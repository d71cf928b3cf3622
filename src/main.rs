// Tally - a terminal calculator
//
// A desktop-calculator experience in the terminal: a themed keypad of
// rounded keycaps, a right-aligned display, and a calculation tape.
//
// Architecture:
// - Engine: the evaluation core (buffer, operands, pending operation)
// - TUI (ratatui): keypad, display, tape and logs panels
// - Config: TOML file with env overrides, managed via `tally config`
// - Logging: tracing captured into an in-app ring buffer, optional files

mod cli;
mod config;
mod engine;
mod logging;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{BufferLayer, LogBuffer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log buffer backing the in-app logs panel
    let log_buffer = LogBuffer::new();

    // Initialize tracing. Logs go to the in-app buffer (stdout would garble
    // the alternate screen), plus optional rotating JSON files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("tally={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so
    // buffered file output flushes on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(BufferLayer::new(log_buffer.clone()))
                    .init();
                None
            }
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Non-blocking writer: file writes happen in a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(BufferLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        }
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(BufferLayer::new(log_buffer.clone()))
            .init();
        None
    };

    tracing::info!("Tally v{} starting", config::VERSION);
    tracing::info!(
        "Theme: {} · tape limit {}",
        config.theme,
        config.tape_limit
    );
    if let Some(path) = Config::config_path() {
        if path.exists() {
            tracing::debug!("Config loaded from {}", path.display());
        } else {
            tracing::debug!("No config file, using defaults");
        }
    }

    // Run the TUI; this blocks until the user quits
    if let Err(e) = tui::run_tui(log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Goodbye");
    Ok(())
}
