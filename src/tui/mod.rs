// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, mouse, timer ticks)
// - Layered key dispatch: global keys, then view keys, then entry keys
// - Mouse hit-testing against the keypad grid

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::engine::{to_json_lines, Button};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, FocusedPanel, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Blocks until the user quits.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, &config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on two things at once with tokio::select!: polled terminal input
/// (keyboard and mouse) and a periodic tick that drives the pressed-keycap
/// flash and toast expiry.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for animations and expirations
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Map a keyboard key to the keypad button it types, if any
///
/// These are entry keys: they fire on every Press event (terminal key
/// repeat behaves like a held digit key would on a physical calculator),
/// so they bypass the InputHandler debounce entirely.
fn entry_button(key: KeyCode) -> Option<Button> {
    match key {
        KeyCode::Enter => Some(Button::Equals),
        KeyCode::Backspace => Some(Button::Backspace),
        KeyCode::Delete => Some(Button::ClearEntry),
        // Unary keys without a single-char keycap label
        KeyCode::Char('n') => Some(Button::Negate),
        KeyCode::Char('^') => Some(Button::Square),
        KeyCode::Char('s') => Some(Button::Sqrt),
        KeyCode::Char('r') => Some(Button::Reciprocal),
        // Everything else resolves through the keycap label contract:
        // digits, '.', operators and their ASCII aliases ('*', 'x', '/')
        KeyCode::Char(c) => Button::from_label(c.encode_utf8(&mut [0; 4])),
        _ => None,
    }
}

/// Handle keyboard input
/// Layered dispatch: Global -> View-specific -> Entry keys
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        _ => return,
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    match app.view {
        View::Help => {
            // Esc or Enter returns to the calculator ('?' toggles globally)
            if matches!(key, KeyCode::Esc | KeyCode::Enter) && app.handle_key_press(key) {
                app.set_view(View::Calculator);
            }
        }
        View::Calculator => handle_calculator_keys(app, key),
    }
}

/// Calculator view keys: tape browsing when the tape has focus, otherwise
/// calculator entry
fn handle_calculator_keys(app: &mut App, key: KeyCode) {
    if app.focused == FocusedPanel::Tape {
        match key {
            KeyCode::Up => {
                if app.handle_key_press(key) {
                    app.tape_select_previous();
                }
            }
            KeyCode::Down => {
                if app.handle_key_press(key) {
                    app.tape_select_next();
                }
            }
            KeyCode::Home => {
                if app.handle_key_press(key) && !app.tape.is_empty() {
                    app.tape_selected = Some(0);
                }
            }
            KeyCode::End => {
                if app.handle_key_press(key) {
                    app.tape_select_clear();
                }
            }
            KeyCode::Esc => {
                if app.handle_key_press(key) {
                    app.tape_select_clear();
                    app.focused = FocusedPanel::Keypad;
                }
            }
            // Typing falls through to entry even while the tape is focused
            other => {
                if let Some(button) = entry_button(other) {
                    app.press_button(button);
                }
            }
        }
        return;
    }

    if let Some(button) = entry_button(key) {
        app.press_button(button);
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current view
/// Uses InputHandler for debounce (trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help toggle
        KeyCode::Char('?') | KeyCode::F(1) => {
            if app.handle_key_press(key) {
                let next = match app.view {
                    View::Help => View::Calculator,
                    View::Calculator => View::Help,
                };
                app.set_view(next);
            }
            true
        }
        // Logs panel toggle
        KeyCode::Char('l') | KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        // Panel focus
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        // Theme cycling
        KeyCode::Char(']') => {
            if app.handle_key_press(key) {
                app.next_theme();
                tracing::info!("Theme: {}", app.theme_kind.name());
            }
            true
        }
        KeyCode::Char('[') => {
            if app.handle_key_press(key) {
                app.prev_theme();
                tracing::info!("Theme: {}", app.theme_kind.name());
            }
            true
        }
        // Copy display / tape to clipboard
        KeyCode::Char('y') => {
            if app.handle_key_press(key) && app.clipboard_enabled {
                let text = app.calc.display().to_string();
                if clipboard::copy_to_clipboard(&text).is_ok() {
                    app.show_toast("✓ Copied display");
                } else {
                    app.show_toast("✗ Failed to copy");
                }
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) && app.clipboard_enabled {
                let json = to_json_lines(&app.tape);
                if clipboard::copy_to_clipboard(&json).is_ok() {
                    app.show_toast("✓ Copied tape as JSON");
                } else {
                    app.show_toast("✗ Failed to copy");
                }
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input
///
/// Clicks activate the keycap under the cursor, motion drives the hover
/// shade, and the wheel browses the tape.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let keypad_hit = |app: &App| -> Option<Button> {
        let area = app.keypad_area?;
        components::keypad::button_at(area, mouse_event.column, mouse_event.row)
    };

    match mouse_event.kind {
        MouseEventKind::Down(_) => {
            if app.view == View::Calculator {
                if let Some(button) = keypad_hit(app) {
                    app.press_button(button);
                }
            }
        }
        MouseEventKind::Moved => {
            app.hovered = keypad_hit(app);
        }
        MouseEventKind::ScrollUp => app.tape_select_previous(),
        MouseEventKind::ScrollDown => app.tape_select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BinaryOp;

    #[test]
    fn entry_keys_map_to_buttons() {
        assert_eq!(entry_button(KeyCode::Char('7')), Some(Button::Digit(7)));
        assert_eq!(entry_button(KeyCode::Enter), Some(Button::Equals));
        assert_eq!(
            entry_button(KeyCode::Char('*')),
            Some(Button::Op(BinaryOp::Mul))
        );
        assert_eq!(entry_button(KeyCode::Backspace), Some(Button::Backspace));
        assert_eq!(entry_button(KeyCode::Delete), Some(Button::ClearEntry));
        assert_eq!(entry_button(KeyCode::Char('s')), Some(Button::Sqrt));
    }

    #[test]
    fn non_entry_keys_do_not_map() {
        assert_eq!(entry_button(KeyCode::Char('q')), None);
        assert_eq!(entry_button(KeyCode::Tab), None);
        assert_eq!(entry_button(KeyCode::Char('[')), None);
    }
}
