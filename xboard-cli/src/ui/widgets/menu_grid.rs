//! Slide-out menu laid out as a grid.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use xboard::panel::MenuItem;

pub struct MenuGrid<'a> {
    items: &'a [MenuItem],
    cursor: usize,
    columns: usize,
}

impl<'a> MenuGrid<'a> {
    pub fn new(items: &'a [MenuItem], cursor: usize, columns: usize) -> Self {
        Self {
            items,
            cursor,
            columns: columns.max(1),
        }
    }
}

impl Widget for MenuGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" 菜单 ");
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.items.len().div_ceil(self.columns);
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); rows])
            .split(inner);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, self.columns as u32); self.columns])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * self.columns + col;
                let Some(item) = self.items.get(index) else {
                    break;
                };
                let style = if index == self.cursor {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Paragraph::new(Span::styled(format!(" {} ", item.label), style))
                    .centered()
                    .render(*cell, buf);
            }
        }
    }
}
