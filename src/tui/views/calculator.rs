// Calculator view
//
// The main screen: display field above the keypad, with the tape panel to
// the right when the terminal is wide enough and the logs panel beyond
// that when toggled on. Stores the keypad rect on the App so mouse events
// can be hit-tested against the same geometry that was rendered.

use crate::tui::app::App;
use crate::tui::components::{display, keypad, logs_panel, tape_panel};
use crate::tui::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Render the calculator view
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let bp = Breakpoint::from_width(area.width);

    let show_tape = app.tape_enabled && bp.at_least(Breakpoint::Normal);
    let show_logs = app.logs_enabled && app.show_logs && bp.at_least(Breakpoint::Wide);

    let mut constraints = vec![Constraint::Min(30)];
    if show_tape {
        constraints.push(Constraint::Percentage(35));
    }
    if show_logs {
        constraints.push(Constraint::Percentage(30));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    // Left column: display on top, keypad below
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(12)])
        .split(columns[0]);

    display::render(f, left[0], app);
    app.keypad_area = Some(left[1]);
    keypad::render(f, left[1], app);

    let mut next = 1;
    if show_tape {
        tape_panel::render(f, columns[next], app);
        next += 1;
    }
    if show_logs {
        logs_panel::render(f, columns[next], app);
    }
}
