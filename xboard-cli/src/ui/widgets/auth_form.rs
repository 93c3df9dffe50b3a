//! Account form modal: email field with suggestions, plus the code button on
//! the register and recovery forms.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::ui::dashboard::AuthForm;

pub struct AuthFormWidget<'a> {
    form: &'a AuthForm,
}

impl<'a> AuthFormWidget<'a> {
    pub fn new(form: &'a AuthForm) -> Self {
        Self { form }
    }

    /// Rows needed to draw the form without clipping.
    pub fn height(form: &AuthForm) -> u16 {
        let button = if form.view().sends_code() { 2 } else { 0 };
        form.suggestions().len() as u16 + 7 + button
    }

    fn code_button(&self) -> Line<'static> {
        let sender = self.form.sender();
        let style = if sender.can_request() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} ", sender.button_label()), style),
        ])
    }
}

impl Widget for AuthFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let view = self.form.view();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} ", view.title()));

        let email = if self.form.email().is_empty() {
            Span::styled("邮箱", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.form.email().to_string())
        };
        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {}", view.subtitle()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(" ✉ ", Style::default().fg(Color::DarkGray)),
                email,
                Span::styled("▏", Style::default().fg(Color::Blue)),
            ]),
        ];

        for (i, suggestion) in self.form.suggestions().iter().enumerate() {
            let style = if self.form.selected() == Some(i) {
                Style::default().fg(Color::White).bg(Color::Blue)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("   {}", suggestion.value),
                style,
            )));
        }

        if view.sends_code() {
            lines.push(Line::default());
            lines.push(self.code_button());
        }

        let enter = if view.sends_code() { "发送验证码" } else { "登录" };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" ↑/↓ 选择  Tab 补全  Enter {}  Esc 关闭", enter),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
