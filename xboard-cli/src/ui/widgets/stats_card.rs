//! Single-figure card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use xboard::panel::StatsCard;

use super::primitives::{format_percent, UsageBar};

/// Card showing a title, a decorated value and an optional description.
///
/// With [`with_usage`](Self::with_usage) the last line becomes a usage bar.
pub struct StatsCardWidget<'a> {
    card: &'a StatsCard,
    color: Color,
    usage: Option<f64>,
}

impl<'a> StatsCardWidget<'a> {
    pub fn new(card: &'a StatsCard) -> Self {
        Self {
            card,
            color: Color::Blue,
            usage: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_usage(mut self, percent: f64) -> Self {
        self.usage = Some(percent);
        self
    }
}

impl Widget for StatsCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut value = Vec::new();
        if let Some(prefix) = &self.card.prefix {
            value.push(Span::raw(format!("{} ", prefix)));
        }
        value.push(Span::styled(
            self.card.value.clone(),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        ));
        if let Some(suffix) = &self.card.suffix {
            value.push(Span::styled(
                format!(" {}", suffix),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut lines = vec![
            Line::from(Span::styled(
                self.card.title.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(value),
        ];
        if let Some(description) = &self.card.description {
            lines.push(Line::from(Span::raw(description.clone())));
        }

        let text_height = lines.len() as u16;
        Paragraph::new(lines).render(inner, buf);

        if let Some(percent) = self.usage {
            if inner.height > text_height {
                let bar_area = Rect {
                    y: inner.y + text_height,
                    height: 1,
                    ..inner
                };
                let label = format!(" {}", format_percent(percent, 1));
                let bar_width = bar_area.width.saturating_sub(label.len() as u16);
                UsageBar::new(percent)
                    .filled_color(self.color)
                    .render(Rect { width: bar_width, ..bar_area }, buf);
                Paragraph::new(label).render(
                    Rect {
                        x: bar_area.x + bar_width,
                        width: bar_area.width - bar_width,
                        ..bar_area
                    },
                    buf,
                );
            }
        }
    }
}
