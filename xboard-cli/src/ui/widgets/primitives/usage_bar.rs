//! Percentage bar using block characters.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A one-line bar filled to `percent` of its width.
pub struct UsageBar {
    percent: f64,
    filled_style: Style,
    empty_style: Style,
}

impl UsageBar {
    /// `percent` is clamped to 0..=100.
    pub fn new(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            filled_style: Style::default().fg(Color::Blue),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn filled_color(mut self, color: Color) -> Self {
        self.filled_style = self.filled_style.fg(color);
        self
    }

    fn filled_cells(&self, width: usize) -> usize {
        ((self.percent / 100.0) * width as f64).round() as usize
    }

    /// Text form for a given width, e.g. `█████░░░░░`.
    pub fn render_string(&self, width: usize) -> String {
        let filled = self.filled_cells(width).min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }

    fn spans(&self, width: usize) -> Vec<Span<'static>> {
        let filled = self.filled_cells(width).min(width);
        vec![
            Span::styled("█".repeat(filled), self.filled_style),
            Span::styled("░".repeat(width - filled), self.empty_style),
        ]
    }
}

impl Widget for UsageBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = Line::from(self.spans(area.width as usize));
        Paragraph::new(line).render(Rect { height: 1, ..area }, buf);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The bar always fills exactly the requested width.
        #[test]
        fn bar_width_matches_request(percent in -50.0f64..200.0, width in 0usize..200) {
            let bar = UsageBar::new(percent).render_string(width);
            prop_assert_eq!(bar.chars().count(), width);
        }
    }
}
