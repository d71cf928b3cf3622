// Help view
//
// Static keybinding reference.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("0-9 .", "digit entry"),
    ("+ - * / %", "operators"),
    ("Enter or =", "equals"),
    ("Backspace", "delete last digit"),
    ("Delete", "clear entry (CE)"),
    ("c", "clear all (C)"),
    ("n", "negate (±)"),
    ("^", "square (x²)"),
    ("s", "square root (√)"),
    ("r", "reciprocal (⅟x)"),
    ("", ""),
    ("Tab", "cycle panel focus"),
    ("Up/Down", "browse the tape"),
    ("Esc", "stop browsing / back"),
    ("l", "toggle logs panel"),
    ("[ ]", "previous / next theme"),
    ("y", "copy display to clipboard"),
    ("Y", "copy tape as JSON lines"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false))
        .title(Span::styled(" Keybindings ", theme.title_style()));

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<14}"), theme.title_style()),
                Span::styled(*action, Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
