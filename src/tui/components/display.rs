// Display field component
//
// The calculator readout: a rounded, right-aligned field showing the buffer
// being edited, with the stored operand and pending operator dimmed above it.
// Long values are truncated from the left so the digits being typed stay
// visible.

use crate::engine::format_number;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render the display field
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(false))
        .style(Style::default().bg(theme.display_bg));

    let inner_width = area.width.saturating_sub(2);

    // Dimmed pending line: "5 +" while the second operand is entered
    let pending_line = match app.calc.pending() {
        Some(op) => format!("{} {}", format_number(app.calc.first_operand()), op.label()),
        None => String::new(),
    };

    let value = truncate_tail(app.calc.display(), inner_width as usize);

    let lines = vec![
        Line::from(pending_line).style(Style::default().fg(theme.display_pending)),
        Line::from(value.to_string()).style(
            Style::default()
                .fg(theme.display_fg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);

    f.render_widget(paragraph, area);
}

/// Keep the right-most part of `s` that fits in `max_width` columns
fn truncate_tail(s: &str, max_width: usize) -> &str {
    let mut width = 0usize;
    let mut start = s.len();

    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }

    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_pass_through() {
        assert_eq!(truncate_tail("123", 10), "123");
        assert_eq!(truncate_tail("", 10), "");
    }

    #[test]
    fn long_values_keep_the_tail() {
        assert_eq!(truncate_tail("123456789", 4), "6789");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_tail("123", 0), "");
    }
}
