// TUI application state
//
// Owns the calculator engine, the tape, and all UI state: current view,
// theme, panel focus, hover/pressed keycap states. Mutated in place by the
// event loop; rendering reads from it every frame.

use super::components::Toast;
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::engine::{Button, Calculator, TapeEntry};
use crate::logging::LogBuffer;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long an activated keycap stays in its pressed shade
const PRESS_FLASH: Duration = Duration::from_millis(180);

/// Full-screen views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Calculator,
    Help,
}

impl View {
    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Calculator => "Calculator",
            View::Help => "Help",
        }
    }
}

/// Panels that can receive keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Keypad,
    Tape,
    Logs,
}

/// Main application state for the TUI
pub struct App {
    /// The evaluation core
    pub calc: Calculator,

    /// Completed computations, oldest first
    pub tape: Vec<TapeEntry>,

    /// Maximum tape entries kept (config `tape_limit`)
    tape_limit: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current view being displayed
    pub view: View,

    /// Which panel receives navigation keys
    pub focused: FocusedPanel,

    /// Current theme selection
    pub theme_kind: ThemeKind,

    /// Resolved theme colors (kept in sync with theme_kind)
    pub theme: Theme,

    /// Paint the theme background or keep the terminal's
    pub use_theme_background: bool,

    /// Tape panel enabled in config
    pub tape_enabled: bool,

    /// Logs panel enabled in config
    pub logs_enabled: bool,

    /// Clipboard copy enabled in config
    pub clipboard_enabled: bool,

    /// Logs panel currently visible (toggled with 'l')
    pub show_logs: bool,

    /// Keycap under the mouse cursor
    pub hovered: Option<Button>,

    /// Recently activated keycap, for the pressed flash
    pressed: Option<(Button, Instant)>,

    /// Keypad rect from the last render, for mouse hit-testing
    pub keypad_area: Option<Rect>,

    /// Selected tape entry (None = follow newest)
    pub tape_selected: Option<usize>,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Input handler for action/navigation key behavior
    input_handler: InputHandler,

    /// Transient notification overlay
    pub toast: Option<Toast>,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            calc: Calculator::new(),
            tape: Vec::new(),
            tape_limit: config.tape_limit.max(1),
            should_quit: false,
            view: View::default(),
            focused: FocusedPanel::default(),
            theme_kind,
            theme: theme_kind.theme(),
            use_theme_background: config.use_theme_background,
            tape_enabled: config.features.tape,
            logs_enabled: config.features.logs_panel,
            clipboard_enabled: config.features.clipboard,
            show_logs: false,
            hovered: None,
            pressed: None,
            keypad_area: None,
            tape_selected: None,
            log_buffer,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            toast: None,
        }
    }

    /// Press a keypad button: run it through the engine, record any
    /// completed computation on the tape, and start the pressed flash.
    pub fn press_button(&mut self, button: Button) {
        self.pressed = Some((button, Instant::now()));

        if let Some(entry) = self.calc.press(button) {
            tracing::debug!("{}", entry.line());
            self.tape.push(entry);
            if self.tape.len() > self.tape_limit {
                let excess = self.tape.len() - self.tape_limit;
                self.tape.drain(..excess);
            }
            // Follow the newest entry unless the user is browsing
            if let Some(idx) = self.tape_selected {
                self.tape_selected = Some(idx.min(self.tape.len().saturating_sub(1)));
            }
        }
    }

    /// Keycap currently in its pressed flash, if any
    pub fn pressed_button(&self) -> Option<Button> {
        match self.pressed {
            Some((button, at)) if at.elapsed() < PRESS_FLASH => Some(button),
            _ => None,
        }
    }

    /// Periodic tick: expire the pressed flash and stale toasts
    pub fn tick(&mut self) {
        if let Some((_, at)) = self.pressed {
            if at.elapsed() >= PRESS_FLASH {
                self.pressed = None;
            }
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Switch to a specific view
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Cycle to the previous theme
    pub fn prev_theme(&mut self) {
        self.theme_kind = self.theme_kind.prev();
        self.theme = self.theme_kind.theme();
    }

    /// Toggle the logs panel (no-op when disabled in config)
    pub fn toggle_logs(&mut self) {
        if self.logs_enabled {
            self.show_logs = !self.show_logs;
            if !self.show_logs && self.focused == FocusedPanel::Logs {
                self.focused = FocusedPanel::Keypad;
            }
        }
    }

    /// Cycle keyboard focus across the visible panels
    pub fn focus_next(&mut self) {
        let mut order = vec![FocusedPanel::Keypad];
        if self.tape_enabled {
            order.push(FocusedPanel::Tape);
        }
        if self.logs_enabled && self.show_logs {
            order.push(FocusedPanel::Logs);
        }
        let current = order.iter().position(|&p| p == self.focused).unwrap_or(0);
        self.focused = order[(current + 1) % order.len()];
    }

    /// Move the tape selection up (into browsing mode)
    pub fn tape_select_previous(&mut self) {
        if self.tape.is_empty() {
            return;
        }
        self.tape_selected = Some(match self.tape_selected {
            Some(idx) => idx.saturating_sub(1),
            None => self.tape.len().saturating_sub(1),
        });
    }

    /// Move the tape selection down; moving past the end resumes follow mode
    pub fn tape_select_next(&mut self) {
        if let Some(idx) = self.tape_selected {
            if idx + 1 < self.tape.len() {
                self.tape_selected = Some(idx + 1);
            } else {
                self.tape_selected = None;
            }
        }
    }

    /// Leave tape browsing mode
    pub fn tape_select_clear(&mut self) {
        self.tape_selected = None;
    }

    /// Show a transient notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BinaryOp;

    fn test_app() -> App {
        App::with_config(LogBuffer::new(), &Config::default())
    }

    #[test]
    fn press_button_records_tape_entries() {
        let mut app = test_app();
        app.press_button(Button::Digit(5));
        app.press_button(Button::Op(BinaryOp::Add));
        app.press_button(Button::Digit(3));
        assert!(app.tape.is_empty());

        app.press_button(Button::Equals);
        assert_eq!(app.tape.len(), 1);
        assert_eq!(app.tape[0].line(), "5 + 3 = 8");
        assert_eq!(app.calc.display(), "8");
    }

    #[test]
    fn tape_is_bounded_by_limit() {
        let mut config = Config::default();
        config.tape_limit = 3;
        let mut app = App::with_config(LogBuffer::new(), &config);

        for _ in 0..5 {
            app.press_button(Button::Digit(2));
            app.press_button(Button::Square);
            app.press_button(Button::ClearEntry);
        }
        assert_eq!(app.tape.len(), 3);
    }

    #[test]
    fn focus_cycles_through_visible_panels() {
        let mut app = test_app();
        app.show_logs = true;
        assert_eq!(app.focused, FocusedPanel::Keypad);
        app.focus_next();
        assert_eq!(app.focused, FocusedPanel::Tape);
        app.focus_next();
        assert_eq!(app.focused, FocusedPanel::Logs);
        app.focus_next();
        assert_eq!(app.focused, FocusedPanel::Keypad);
    }

    #[test]
    fn hiding_logs_returns_focus_to_keypad() {
        let mut app = test_app();
        app.show_logs = true;
        app.focused = FocusedPanel::Logs;
        app.toggle_logs();
        assert!(!app.show_logs);
        assert_eq!(app.focused, FocusedPanel::Keypad);
    }

    #[test]
    fn tape_selection_walks_and_resumes_follow() {
        let mut app = test_app();
        for d in [2u8, 3, 4] {
            app.press_button(Button::Digit(d));
            app.press_button(Button::Square);
            app.press_button(Button::ClearEntry);
        }
        assert_eq!(app.tape.len(), 3);
        assert_eq!(app.tape_selected, None);

        app.tape_select_previous();
        assert_eq!(app.tape_selected, Some(2));
        app.tape_select_previous();
        assert_eq!(app.tape_selected, Some(1));
        app.tape_select_next();
        assert_eq!(app.tape_selected, Some(2));
        app.tape_select_next();
        assert_eq!(app.tape_selected, None);
    }
}
