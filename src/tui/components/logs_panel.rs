// Logs panel component
//
// Shows the most recent entries from the tracing ring buffer, color-coded
// by severity, newest at the bottom.

use crate::tui::app::{App, FocusedPanel};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render the logs panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focused == FocusedPanel::Logs;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .title(Span::styled(" Logs ", theme.title_style()));

    let inner_height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.snapshot();
    let start = entries.len().saturating_sub(inner_height);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(theme.tape_expression),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    theme.log_style(entry.level),
                ),
                Span::styled(entry.message.clone(), theme.base_style()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
