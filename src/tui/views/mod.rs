// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Calculator: display, keypad, tape and logs panels
// - Help: keybinding reference
//
// This module builds the shell layout (title bar, content, status bar) and
// dispatches the content slot to the appropriate view.

mod calculator;
mod help;

use super::app::{App, View};
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the whole frame (respects the config toggle)
    if app.use_theme_background {
        let bg_block = Block::default().style(Style::default().bg(app.theme.bg));
        f.render_widget(bg_block, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    match app.view {
        View::Calculator => calculator::render(f, chunks[1], app),
        View::Help => help::render(f, chunks[1], app),
    }

    components::status_bar::render(f, chunks[2], app);

    // Toast overlay on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
