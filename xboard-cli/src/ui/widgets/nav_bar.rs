//! Top navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use xboard::panel::NavShell;

pub struct NavBar<'a> {
    shell: &'a NavShell,
    user_name: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(shell: &'a NavShell, user_name: &'a str) -> Self {
        Self { shell, user_name }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            " Xboard ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )];

        for item in self.shell.menu() {
            spans.push(Span::raw("  "));
            let style = if self.shell.is_selected(item.page) {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(item.label.clone(), style));
        }

        // Pages reached from the grid are not in the bar; show where we are.
        if self.shell.selected_index().is_none() {
            spans.push(Span::styled(
                format!("  › {}", self.shell.current().label()),
                Style::default().fg(Color::Blue),
            ));
        }

        spans.push(Span::styled(
            format!("   {} ", self.user_name),
            Style::default().fg(Color::DarkGray),
        ));

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
