//! Page title block.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use xboard::panel::PageHeader;

pub struct PageHeaderWidget<'a> {
    header: &'a PageHeader,
}

impl<'a> PageHeaderWidget<'a> {
    pub fn new(header: &'a PageHeader) -> Self {
        Self { header }
    }
}

impl Widget for PageHeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.header.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = &self.header.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let extra_width = self
            .header
            .extra
            .as_ref()
            .map(|e| e.chars().count() as u16 * 2)
            .unwrap_or(0);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(extra_width)])
            .split(inner);

        Paragraph::new(lines).render(columns[0], buf);

        if let Some(extra) = &self.header.extra {
            Paragraph::new(Line::from(Span::styled(
                extra.clone(),
                Style::default().fg(Color::Blue),
            )))
            .render(columns[1], buf);
        }
    }
}
