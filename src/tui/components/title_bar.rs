// Title bar component
//
// Renders the app title with version and the active theme name.

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = format!(" 🧮 Tally v{VERSION}");

    let title = Paragraph::new(title_text).style(app.theme.title_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.theme.title_style())
            .title_top(Line::from(format!(" {} ", app.theme_kind.name())).right_aligned()),
    );

    f.render_widget(title, area);
}
