// Tape panel component
//
// Scrollable list of completed computations. Follows the newest entry until
// the user starts browsing with Up/Down; Esc resumes follow mode.

use crate::tui::app::{App, FocusedPanel};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render the tape panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focused == FocusedPanel::Tape;

    let title = format!(" Tape ({}) ", app.tape.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .title(Span::styled(title, theme.title_style()));

    let inner_height = area.height.saturating_sub(2) as usize;
    let total = app.tape.len();

    // Window the entries: keep the selection visible, else show the newest
    let anchor = app.tape_selected.unwrap_or(total.saturating_sub(1));
    let start = anchor.saturating_sub(inner_height.saturating_sub(1));
    let end = (start + inner_height).min(total);

    let lines: Vec<Line> = app.tape[start..end]
        .iter()
        .enumerate()
        .map(|(offset, entry)| {
            let idx = start + offset;
            let selected = app.tape_selected == Some(idx);

            if selected {
                Line::from(Span::styled(entry.line(), theme.selected_style()))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{} = ", entry.expression),
                        Style::default().fg(theme.tape_expression),
                    ),
                    Span::styled(
                        entry.result.clone(),
                        Style::default().fg(theme.tape_result),
                    ),
                ])
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
