//! Formatting and layout helpers for dashboard display.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Format a percentage with the given number of decimals.
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.precision$}%", value, precision = precision)
}

/// A rectangle of `width` by `height` cells centered in `area`, shrunk to
/// fit when `area` is smaller.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
