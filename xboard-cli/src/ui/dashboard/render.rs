//! Main dashboard rendering.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Navigation bar (2 lines)                                │
//! ├─────────────────────────────────────────────────────────┤
//! │ Page body                                               │
//! │   dashboard: welcome + balance, stats row, quick import │
//! │   others:    page header + placeholder                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Footer (1 line): key help, notice or quit prompt        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Modals (mobile menu, import, account forms) draw over the body.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use xboard::greeting::current_greeting;
use xboard::panel::{Page, PageHeader};

use super::state::{NoticeKind, Overlay, PanelState, GRID_COLUMNS};
use crate::ui::widgets::primitives::centered_rect;
use crate::ui::widgets::{
    AuthFormWidget, ImportDialog, MenuGrid, NavBar, PageHeaderWidget, StatsCardWidget,
    WelcomeCard,
};

/// Render the whole screen.
pub fn render_ui(frame: &mut Frame, state: &PanelState, now: Instant, spinner: Option<char>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(NavBar::new(state.nav(), state.user_name()), chunks[0]);

    match state.nav().current() {
        Page::Dashboard => render_dashboard_page(frame, chunks[1], state, spinner),
        page => render_placeholder_page(frame, chunks[1], page),
    }

    render_footer(frame, chunks[2], state, now);

    if state.nav().is_mobile_menu_open() {
        let rows = state.grid().len().div_ceil(GRID_COLUMNS) as u16;
        let area = centered_rect(48, rows * 2 + 2, chunks[1]);
        frame.render_widget(
            MenuGrid::new(state.grid(), state.grid_cursor(), GRID_COLUMNS),
            area,
        );
    }

    match state.overlay() {
        Overlay::Import => {
            let area = centered_rect(64, 10, chunks[1]);
            frame.render_widget(ImportDialog::new(state.subscription_url()), area);
        }
        Overlay::Form(view) => {
            let form = state.form(view);
            let area = centered_rect(52, AuthFormWidget::height(form), chunks[1]);
            frame.render_widget(AuthFormWidget::new(form), area);
        }
        Overlay::None => {}
    }
}

fn render_dashboard_page(frame: &mut Frame, area: Rect, state: &PanelState, spinner: Option<char>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Welcome + balance
            Constraint::Length(6), // Stats row
            Constraint::Min(0),    // Quick import
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[0]);

    frame.render_widget(
        WelcomeCard::new(current_greeting(), state.user_name(), state.quote())
            .with_spinner(spinner),
        top[0],
    );

    let account = state.account();
    let balance = account.balance_card();
    frame.render_widget(
        StatsCardWidget::new(&balance).with_color(Color::Yellow),
        top[1],
    );

    let stats = account.stats_cards(chrono::Local::now().naive_local());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len().max(1) as u32); stats.len()])
        .split(rows[1]);
    let colors = [Color::Blue, Color::Green, Color::Red];

    for (i, (card, column)) in stats.iter().zip(columns.iter()).enumerate() {
        let mut widget = StatsCardWidget::new(card).with_color(colors[i % colors.len()]);
        if i == 0 {
            widget = widget.with_usage(account.traffic.remaining_percent());
        }
        frame.render_widget(widget, *column);
    }

    let import = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("[i] ", Style::default().fg(Color::Yellow)),
            Span::raw("一键导入订阅到客户端 · "),
            Span::styled("[l] ", Style::default().fg(Color::Yellow)),
            Span::raw("登录 · "),
            Span::styled("[r] ", Style::default().fg(Color::Yellow)),
            Span::raw("注册新账户 · "),
            Span::styled("[f] ", Style::default().fg(Color::Yellow)),
            Span::raw("忘记密码"),
        ]),
        Line::from(Span::styled(
            state.subscription_url().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" 快速导入 ", Style::default().fg(Color::Blue))),
    );
    frame.render_widget(import, rows[2]);
}

fn render_placeholder_page(frame: &mut Frame, area: Rect, page: Page) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = PageHeader::new(page.label()).with_subtitle(page_subtitle(page));
    frame.render_widget(PageHeaderWidget::new(&header), rows[0]);

    frame.render_widget(
        Paragraph::new(Span::styled("暂无数据", Style::default().fg(Color::DarkGray)))
            .centered(),
        rows[1],
    );
}

fn page_subtitle(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "账户概览",
        Page::Plan => "选择适合你的订阅套餐",
        Page::Node => "当前可用的节点状态",
        Page::Ticket => "遇到问题可以通过工单与我们联系",
        Page::Knowledge => "使用教程与常见问题",
        Page::Doc => "客户端下载与配置说明",
        Page::Invite => "邀请好友注册获得返佣",
        Page::Profile => "账户信息与安全设置",
        Page::Traffic => "按日统计的流量使用记录",
        Page::Orders => "历史订单与支付状态",
        Page::GiftCard => "兑换礼品卡获得余额或套餐",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &PanelState, now: Instant) {
    let line = if let Some(remaining) = state.confirmation_remaining(now) {
        Line::from(Span::styled(
            format!(
                " 确认退出? [y/q] 退出  [n/Esc] 取消 ({}s)",
                remaining.as_secs() + 1
            ),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ))
    } else if let (Some(notice), Some(kind)) = (state.notice(), state.notice_kind()) {
        let (mark, color) = match kind {
            NoticeKind::Success => ("✓", Color::Green),
            NoticeKind::Failure => ("✗", Color::Red),
        };
        Line::from(Span::styled(
            format!(" {} {}", mark, notice),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
             " Tab/→ 下一页  ←/Shift+Tab 上一页  m 菜单  i 导入  l 登录  r 注册  f 找回密码  q 退出",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
