//! Client import modal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use xboard::deeplink::ImportClient;

pub struct ImportDialog<'a> {
    subscription_url: &'a str,
}

impl<'a> ImportDialog<'a> {
    pub fn new(subscription_url: &'a str) -> Self {
        Self { subscription_url }
    }
}

impl Widget for ImportDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" 快速导入 ");

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = ImportClient::ALL
            .iter()
            .enumerate()
            .map(|(i, client)| {
                Line::from(vec![
                    Span::styled(format!(" [{}] ", i + 1), key_style),
                    Span::raw(format!("一键导入 {}", client.display_name())),
                ])
            })
            .collect();

        lines.push(Line::from(vec![
            Span::styled(" [v] ", key_style),
            Span::raw("复制链接 (v2rayN)"),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" [c] ", key_style),
            Span::raw("复制通用订阅链接"),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {}", self.subscription_url),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            " Esc 关闭",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
