// Status bar component
//
// Renders session info at the bottom: uptime, current view, pending
// operation, tape count. Adapts to terminal width.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let pending = match app.calc.pending() {
        Some(op) => format!(" │ op {}", op.label()),
        None => String::new(),
    };

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ {} │ tape {}{} │ q quit · ? help",
            app.uptime(),
            app.view.name(),
            app.tape.len(),
            pending,
        )
    } else {
        // Compact format for narrow terminals
        format!(" {} │ {}{}", app.uptime(), app.tape.len(), pending)
    };

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
