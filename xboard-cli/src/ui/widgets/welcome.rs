//! Greeting card with the quote of the day.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use xboard::greeting::Greeting;

pub struct WelcomeCard<'a> {
    greeting: Greeting,
    user_name: &'a str,
    quote: &'a str,
    spinner: Option<char>,
}

impl<'a> WelcomeCard<'a> {
    pub fn new(greeting: Greeting, user_name: &'a str, quote: &'a str) -> Self {
        Self {
            greeting,
            user_name,
            quote,
            spinner: None,
        }
    }

    /// Show a spinner before the quote while it is loading.
    pub fn with_spinner(mut self, spinner: Option<char>) -> Self {
        self.spinner = spinner;
        self
    }
}

impl Widget for WelcomeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let quote = match self.spinner {
            Some(frame) => format!("{} {}", frame, self.quote),
            None => self.quote.to_string(),
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{}，{}", self.greeting, self.user_name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(quote, Style::default().fg(Color::DarkGray))),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
