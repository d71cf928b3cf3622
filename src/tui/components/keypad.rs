// Keypad component
//
// Draws the 6x4 button grid as rounded keycaps styled by class (digit,
// function, accent equals, danger clear) with hover and pressed shades.
// Grid geometry is a pure function of the area so rendering and mouse
// hit-testing can never disagree.

use crate::engine::{Button, GRID};
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Compute the keycap rect for every button in the grid
pub fn grid_cells(area: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, GRID.len() as u32); GRID.len()])
        .split(area);

    let mut cells = Vec::with_capacity(GRID.len() * 4);
    for (row_area, row_buttons) in rows.iter().zip(GRID.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 4); 4])
            .split(*row_area);
        for (cell, button) in cols.iter().zip(row_buttons.iter()) {
            cells.push((*button, *cell));
        }
    }
    cells
}

/// Find the button under an absolute terminal position
pub fn button_at(area: Rect, x: u16, y: u16) -> Option<Button> {
    grid_cells(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(x, y)))
        .map(|(button, _)| button)
}

/// Render the keypad grid
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let pressed = app.pressed_button();

    for (button, cell) in grid_cells(area) {
        if cell.width == 0 || cell.height == 0 {
            continue;
        }

        let is_hovered = app.hovered == Some(button);
        let is_pressed = pressed == Some(button);
        let style = theme.key_style(button.class(), is_hovered, is_pressed);

        // Borderless fallback when the cell is too cramped for a keycap
        let bordered = cell.width >= 3 && cell.height >= 3;

        let mut keycap = Paragraph::new(centered_label(button, cell, bordered))
            .alignment(Alignment::Center)
            .style(style);

        if bordered {
            keycap = keycap.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.border_style(false))
                    .style(style),
            );
        }

        f.render_widget(keycap, cell);
    }
}

/// Pad the keycap label so it sits vertically centered in the cell
fn centered_label(button: Button, cell: Rect, bordered: bool) -> Vec<Line<'static>> {
    let inner_height = if bordered {
        cell.height.saturating_sub(2)
    } else {
        cell.height
    };
    let top_pad = inner_height.saturating_sub(1) / 2;

    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(button.label()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(2, 3, 40, 24)
    }

    #[test]
    fn grid_has_a_cell_per_button() {
        assert_eq!(grid_cells(test_area()).len(), 24);
    }

    #[test]
    fn every_cell_hit_tests_back_to_its_button() {
        for (button, rect) in grid_cells(test_area()) {
            let center_x = rect.x + rect.width / 2;
            let center_y = rect.y + rect.height / 2;
            assert_eq!(
                button_at(test_area(), center_x, center_y),
                Some(button),
                "center of {:?} missed",
                button.label()
            );
        }
    }

    #[test]
    fn positions_outside_the_grid_miss() {
        let area = test_area();
        assert_eq!(button_at(area, 0, 0), None);
        assert_eq!(button_at(area, area.right() + 1, area.bottom() + 1), None);
    }

    #[test]
    fn cells_do_not_overlap() {
        let cells = grid_cells(test_area());
        for (i, (_, a)) in cells.iter().enumerate() {
            for (_, b) in cells.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty(), "{a:?} overlaps {b:?}");
            }
        }
    }
}
