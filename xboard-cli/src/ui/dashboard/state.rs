//! State types for the dashboard.
//!
//! Key handling and timers live here so they can be tested without a
//! terminal. The dashboard shell feeds key codes and elapsed time in and
//! carries out the returned [`DashboardEvent`]s.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use xboard::cooldown::{CodeEvent, CodeSender, SENT_NOTICE};
use xboard::deeplink::ImportClient;
use xboard::email::{EmailSuggester, Suggestion};
use xboard::panel::{desktop_menu, mobile_grid, AccountSummary, AuthView, MenuItem, NavShell, Page};
use xboard::quote::LOADING_QUOTE;

/// Timeout for quit confirmation (seconds).
pub const QUIT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a notice stays in the footer.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Columns in the mobile menu grid.
pub const GRID_COLUMNS: usize = 3;

/// Shown after the login form is submitted.
pub const LOGIN_NOTICE: &str = "登录成功";

/// Shown when the login form is submitted without an email.
pub const EMPTY_EMAIL_NOTICE: &str = "请输入邮箱";

/// Side effects requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// User confirmed quit.
    Quit,
    /// Copy the subscription URL, then show `notice`.
    CopySubscription { notice: &'static str },
    /// Open the import deep link for a client.
    OpenClient(ImportClient),
}

/// Modal currently covering the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Import,
    Form(AuthView),
}

/// Settings the dashboard is built from.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub user_name: String,
    pub subscription_url: String,
    pub email_suffixes: Vec<String>,
    pub cooldown_secs: u32,
}

/// Whether a notice reports something that worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Transient footer message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

/// Email field with live suggestions, plus the send-code button on the
/// forms that have one.
#[derive(Debug, Clone)]
pub struct AuthForm {
    view: AuthView,
    email: String,
    selected: Option<usize>,
    suggester: EmailSuggester,
    sender: CodeSender,
}

impl AuthForm {
    pub fn new(view: AuthView, suggester: EmailSuggester, cooldown_secs: u32) -> Self {
        Self {
            view,
            email: String::new(),
            selected: None,
            suggester,
            sender: CodeSender::new(cooldown_secs),
        }
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggester.suggest(Some(&self.email))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn sender(&self) -> &CodeSender {
        &self.sender
    }

    pub fn push_char(&mut self, c: char) {
        self.email.push(c);
        self.selected = None;
    }

    pub fn backspace(&mut self) {
        self.email.pop();
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % count));
    }

    pub fn select_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(count - 1, |i| (i + count - 1) % count));
    }

    /// Replace the input with the highlighted suggestion, or the first one
    /// when nothing is highlighted. Returns `false` when there is nothing to
    /// accept.
    pub fn accept(&mut self) -> bool {
        let suggestions = self.suggestions();
        let index = self.selected.unwrap_or(0);
        match suggestions.into_iter().nth(index) {
            Some(choice) => {
                self.email = choice.value;
                self.selected = None;
                true
            }
            None => false,
        }
    }

    /// Start sending a code. Always `false` on the login form.
    pub fn request_code(&mut self) -> bool {
        self.view.sends_code() && self.sender.request()
    }

    pub fn tick(&mut self, dt: Duration) -> Option<CodeEvent> {
        self.sender.tick(dt)
    }
}

/// Everything the dashboard shows, independent of rendering.
#[derive(Debug, Clone)]
pub struct PanelState {
    nav: NavShell,
    grid: Vec<MenuItem>,
    grid_cursor: usize,
    overlay: Overlay,
    login: AuthForm,
    register: AuthForm,
    recovery: AuthForm,
    quit_confirmation: Option<Instant>,
    notice: Option<Notice>,
    quote: String,
    user_name: String,
    subscription_url: String,
    account: AccountSummary,
}

impl PanelState {
    pub fn new(config: DashboardConfig) -> Self {
        let suggester = EmailSuggester::new(config.email_suffixes);
        let form = |view| AuthForm::new(view, suggester.clone(), config.cooldown_secs);
        Self {
            nav: NavShell::new(desktop_menu()),
            grid: mobile_grid(),
            grid_cursor: 0,
            overlay: Overlay::None,
            login: form(AuthView::Login),
            register: form(AuthView::Register),
            recovery: form(AuthView::ForgotPassword),
            quit_confirmation: None,
            notice: None,
            quote: LOADING_QUOTE.to_string(),
            user_name: config.user_name,
            subscription_url: config.subscription_url,
            account: AccountSummary::mock(),
        }
    }

    pub fn nav(&self) -> &NavShell {
        &self.nav
    }

    pub fn grid(&self) -> &[MenuItem] {
        &self.grid
    }

    pub fn grid_cursor(&self) -> usize {
        self.grid_cursor
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn form(&self, view: AuthView) -> &AuthForm {
        match view {
            AuthView::Login => &self.login,
            AuthView::Register => &self.register,
            AuthView::ForgotPassword => &self.recovery,
        }
    }

    fn form_mut(&mut self, view: AuthView) -> &mut AuthForm {
        match view {
            AuthView::Login => &mut self.login,
            AuthView::Register => &mut self.register,
            AuthView::ForgotPassword => &mut self.recovery,
        }
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn set_quote(&mut self, quote: String) {
        self.quote = quote;
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn subscription_url(&self) -> &str {
        &self.subscription_url
    }

    pub fn account(&self) -> &AccountSummary {
        &self.account
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    pub fn notice_kind(&self) -> Option<NoticeKind> {
        self.notice.as_ref().map(|n| n.kind)
    }

    pub fn notify(&mut self, text: impl Into<String>, now: Instant) {
        self.show_notice(text.into(), NoticeKind::Success, now);
    }

    pub fn notify_failure(&mut self, text: impl Into<String>, now: Instant) {
        self.show_notice(text.into(), NoticeKind::Failure, now);
    }

    fn show_notice(&mut self, text: String, kind: NoticeKind, now: Instant) {
        self.notice = Some(Notice {
            text,
            kind,
            shown_at: now,
        });
    }

    /// Remaining time for the quit confirmation, if confirming.
    pub fn confirmation_remaining(&self, now: Instant) -> Option<Duration> {
        self.quit_confirmation
            .map(|t| QUIT_CONFIRM_TIMEOUT.saturating_sub(now.saturating_duration_since(t)))
    }

    /// Advance timers by `dt`.
    pub fn tick(&mut self, dt: Duration, now: Instant) {
        for view in AuthView::ALL {
            if let Some(CodeEvent::Sent) = self.form_mut(view).tick(dt) {
                self.notify(SENT_NOTICE, now);
            }
        }

        if let Some(notice) = &self.notice {
            if now.saturating_duration_since(notice.shown_at) >= NOTICE_DURATION {
                self.notice = None;
            }
        }

        if let Some(confirm_time) = self.quit_confirmation {
            if now.saturating_duration_since(confirm_time) > QUIT_CONFIRM_TIMEOUT {
                self.quit_confirmation = None;
            }
        }
    }

    /// Handle a key press.
    ///
    /// Quitting goes through a confirmation step:
    /// - First `q` or `Esc`: enters confirmation mode (5 second timeout)
    /// - Second `q` or `y`: confirms quit
    /// - `n` or `Esc`: cancels confirmation
    ///
    /// While a modal or the mobile menu is open, `Esc` closes it instead.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Option<DashboardEvent> {
        if self.quit_confirmation.is_some() {
            match key {
                KeyCode::Char('q' | 'Q' | 'y' | 'Y') => return Some(DashboardEvent::Quit),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.quit_confirmation = None,
                _ => {}
            }
            return None;
        }

        match self.overlay {
            Overlay::Import => return self.handle_import_key(key),
            Overlay::Form(view) => {
                self.handle_form_key(view, key, now);
                return None;
            }
            Overlay::None => {}
        }

        if self.nav.is_mobile_menu_open() {
            self.handle_grid_key(key);
            return None;
        }

        match key {
            KeyCode::Tab | KeyCode::Right => self.nav.next(),
            KeyCode::BackTab | KeyCode::Left => self.nav.previous(),
            KeyCode::Char('m') => {
                self.grid_cursor = 0;
                self.nav.toggle_mobile_menu();
            }
            KeyCode::Char('i') => self.overlay = Overlay::Import,
            KeyCode::Char('l') => self.overlay = Overlay::Form(AuthView::Login),
            KeyCode::Char('r') => self.overlay = Overlay::Form(AuthView::Register),
            KeyCode::Char('f') => self.overlay = Overlay::Form(AuthView::ForgotPassword),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.quit_confirmation = Some(now),
            _ => {}
        }
        None
    }

    fn handle_import_key(&mut self, key: KeyCode) -> Option<DashboardEvent> {
        match key {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                ImportClient::ALL
                    .get(index)
                    .map(|client| DashboardEvent::OpenClient(*client))
            }
            KeyCode::Char('v') => Some(DashboardEvent::CopySubscription {
                notice: "链接已复制，请打开 v2rayN 粘贴",
            }),
            KeyCode::Char('c') => Some(DashboardEvent::CopySubscription {
                notice: "通用订阅链接已复制",
            }),
            KeyCode::Esc | KeyCode::Char('i' | 'q') => {
                self.overlay = Overlay::None;
                None
            }
            _ => None,
        }
    }

    fn handle_form_key(&mut self, view: AuthView, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Esc => self.overlay = Overlay::None,
            KeyCode::Enter if !view.sends_code() => self.submit_login(now),
            key => {
                let form = self.form_mut(view);
                match key {
                    KeyCode::Down => form.select_next(),
                    KeyCode::Up => form.select_previous(),
                    KeyCode::Tab => {
                        form.accept();
                    }
                    KeyCode::Enter => {
                        form.request_code();
                    }
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Char(c) if !c.is_whitespace() => form.push_char(c),
                    _ => {}
                }
            }
        }
    }

    /// Mock sign-in: any non-empty email lands on the dashboard.
    fn submit_login(&mut self, now: Instant) {
        if self.login.email().trim().is_empty() {
            self.notify_failure(EMPTY_EMAIL_NOTICE, now);
            return;
        }
        self.overlay = Overlay::None;
        self.nav.navigate(Page::Dashboard);
        self.notify(LOGIN_NOTICE, now);
    }

    fn handle_grid_key(&mut self, key: KeyCode) {
        let len = self.grid.len();
        if len == 0 {
            self.nav.toggle_mobile_menu();
            return;
        }
        match key {
            KeyCode::Right => self.grid_cursor = (self.grid_cursor + 1) % len,
            KeyCode::Left => self.grid_cursor = (self.grid_cursor + len - 1) % len,
            KeyCode::Down => self.grid_cursor = (self.grid_cursor + GRID_COLUMNS) % len,
            KeyCode::Up => self.grid_cursor = (self.grid_cursor + len - GRID_COLUMNS % len) % len,
            KeyCode::Enter => {
                let page = self.grid[self.grid_cursor].page;
                self.nav.navigate(page);
            }
            KeyCode::Esc | KeyCode::Char('m' | 'q') => self.nav.toggle_mobile_menu(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PanelState {
        PanelState::new(DashboardConfig {
            user_name: "吴彦祖".to_string(),
            subscription_url: "https://example.com/sub".to_string(),
            email_suffixes: vec!["qq.com".to_string(), "gmail.com".to_string()],
            cooldown_secs: 2,
        })
    }

    fn press(state: &mut PanelState, keys: &[KeyCode]) -> Vec<DashboardEvent> {
        let now = Instant::now();
        keys.iter()
            .filter_map(|k| state.handle_key(*k, now))
            .collect()
    }

    fn type_text(state: &mut PanelState, text: &str) {
        for c in text.chars() {
            state.handle_key(KeyCode::Char(c), Instant::now());
        }
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.nav().current(), Page::Dashboard);
        assert_eq!(s.quote(), LOADING_QUOTE);
        assert_eq!(s.overlay(), Overlay::None);
        assert!(s.notice().is_none());
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut s = state();
        press(&mut s, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(s.nav().current(), Page::Node);
        press(&mut s, &[KeyCode::BackTab]);
        assert_eq!(s.nav().current(), Page::Plan);
        press(&mut s, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(s.nav().current(), Page::Ticket);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut s = state();
        assert!(press(&mut s, &[KeyCode::Char('q')]).is_empty());
        assert!(s.confirmation_remaining(Instant::now()).is_some());
        assert_eq!(press(&mut s, &[KeyCode::Char('y')]), vec![DashboardEvent::Quit]);
    }

    #[test]
    fn test_quit_confirmation_cancel() {
        let mut s = state();
        press(&mut s, &[KeyCode::Esc, KeyCode::Char('n')]);
        assert!(s.confirmation_remaining(Instant::now()).is_none());
    }

    #[test]
    fn test_quit_confirmation_times_out() {
        let mut s = state();
        let start = Instant::now();
        s.handle_key(KeyCode::Char('q'), start);
        s.tick(Duration::ZERO, start + QUIT_CONFIRM_TIMEOUT + Duration::from_millis(1));
        assert!(s.confirmation_remaining(start).is_none());
    }

    #[test]
    fn test_mobile_grid_navigation() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('m')]);
        assert!(s.nav().is_mobile_menu_open());
        press(&mut s, &[KeyCode::Down, KeyCode::Right, KeyCode::Enter]);
        // Row 2, column 2 of the grid is 礼品卡.
        assert_eq!(s.nav().current(), Page::GiftCard);
        assert!(!s.nav().is_mobile_menu_open());
    }

    #[test]
    fn test_mobile_grid_up_wraps() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('m'), KeyCode::Up]);
        assert_eq!(s.grid_cursor(), 6);
    }

    #[test]
    fn test_import_dialog_events() {
        let mut s = state();
        let events = press(
            &mut s,
            &[
                KeyCode::Char('i'),
                KeyCode::Char('2'),
                KeyCode::Char('c'),
                KeyCode::Char('9'),
            ],
        );
        assert_eq!(
            events,
            vec![
                DashboardEvent::OpenClient(ImportClient::Hiddify),
                DashboardEvent::CopySubscription {
                    notice: "通用订阅链接已复制"
                },
            ]
        );
        press(&mut s, &[KeyCode::Esc]);
        assert_eq!(s.overlay(), Overlay::None);
    }

    #[test]
    fn test_register_suggestions_follow_input() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('r')]);
        type_text(&mut s, "amy");
        let values: Vec<_> = s.form(AuthView::Register).suggestions().into_iter().map(|x| x.value).collect();
        assert_eq!(values, vec!["amy@qq.com", "amy@gmail.com"]);

        type_text(&mut s, "@");
        assert!(s.form(AuthView::Register).suggestions().is_empty());
    }

    #[test]
    fn test_register_keys_do_not_trigger_globals() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('r')]);
        type_text(&mut s, "qim");
        assert_eq!(s.overlay(), Overlay::Form(AuthView::Register));
        assert!(s.confirmation_remaining(Instant::now()).is_none());
        assert_eq!(s.form(AuthView::Register).email(), "qim");
    }

    #[test]
    fn test_register_select_and_accept() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('r')]);
        type_text(&mut s, "amy");
        press(&mut s, &[KeyCode::Down, KeyCode::Down, KeyCode::Tab]);
        assert_eq!(s.form(AuthView::Register).email(), "amy@gmail.com");
        assert!(s.form(AuthView::Register).suggestions().is_empty());
    }

    #[test]
    fn test_register_up_selects_last() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('r')]);
        type_text(&mut s, "amy");
        press(&mut s, &[KeyCode::Up]);
        assert_eq!(s.form(AuthView::Register).selected(), Some(1));
    }

    #[test]
    fn test_send_code_flow() {
        let mut s = state();
        let now = Instant::now();
        press(&mut s, &[KeyCode::Char('r'), KeyCode::Enter]);
        assert_eq!(s.form(AuthView::Register).sender().button_label(), "发送中...");

        s.tick(Duration::from_millis(500), now);
        assert_eq!(s.notice(), Some(SENT_NOTICE));
        assert_eq!(s.form(AuthView::Register).sender().button_label(), "2s");

        // A second Enter during cooldown is ignored.
        press(&mut s, &[KeyCode::Enter]);
        assert_eq!(s.form(AuthView::Register).sender().button_label(), "2s");

        s.tick(Duration::from_secs(2), now);
        assert_eq!(s.form(AuthView::Register).sender().button_label(), "发送验证码");
    }

    #[test]
    fn test_login_form_suggests_and_signs_in() {
        let mut s = state();
        press(&mut s, &[KeyCode::Tab, KeyCode::Char('l')]);
        assert_eq!(s.overlay(), Overlay::Form(AuthView::Login));
        type_text(&mut s, "lee");
        let values: Vec<_> = s
            .form(AuthView::Login)
            .suggestions()
            .into_iter()
            .map(|x| x.value)
            .collect();
        assert_eq!(values, vec!["lee@qq.com", "lee@gmail.com"]);

        press(&mut s, &[KeyCode::Up, KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(s.form(AuthView::Login).email(), "lee@gmail.com");
        assert_eq!(s.overlay(), Overlay::None);
        assert_eq!(s.nav().current(), Page::Dashboard);
        assert_eq!(s.notice(), Some(LOGIN_NOTICE));
        assert_eq!(s.notice_kind(), Some(NoticeKind::Success));
    }

    #[test]
    fn test_login_requires_email() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('l'), KeyCode::Enter]);
        assert_eq!(s.overlay(), Overlay::Form(AuthView::Login));
        assert_eq!(s.notice(), Some(EMPTY_EMAIL_NOTICE));
        assert_eq!(s.notice_kind(), Some(NoticeKind::Failure));
    }

    #[test]
    fn test_login_form_never_sends_code() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('l')]);
        type_text(&mut s, "x");
        press(&mut s, &[KeyCode::Enter]);
        assert!(s.form(AuthView::Login).sender().can_request());
    }

    #[test]
    fn test_forgot_password_form_flow() {
        let mut s = state();
        let now = Instant::now();
        press(&mut s, &[KeyCode::Char('f')]);
        assert_eq!(s.overlay(), Overlay::Form(AuthView::ForgotPassword));
        type_text(&mut s, "amy");
        press(&mut s, &[KeyCode::Tab]);
        assert_eq!(s.form(AuthView::ForgotPassword).email(), "amy@qq.com");

        press(&mut s, &[KeyCode::Enter]);
        let label = |s: &PanelState| s.form(AuthView::ForgotPassword).sender().button_label();
        assert_eq!(label(&s), "发送中...");
        s.tick(Duration::from_millis(500), now);
        assert_eq!(s.notice(), Some(SENT_NOTICE));
        assert_eq!(label(&s), "2s");
        s.tick(Duration::from_secs(2), now);
        assert_eq!(label(&s), "发送验证码");
    }

    #[test]
    fn test_form_cooldowns_are_independent() {
        let mut s = state();
        press(&mut s, &[KeyCode::Char('r'), KeyCode::Enter, KeyCode::Esc]);
        press(&mut s, &[KeyCode::Char('f')]);
        assert!(s.form(AuthView::ForgotPassword).sender().can_request());
        assert!(!s.form(AuthView::Register).sender().can_request());
    }

    #[test]
    fn test_failure_notice_kind() {
        let mut s = state();
        let now = Instant::now();
        s.notify_failure("复制失败: none", now);
        assert_eq!(s.notice_kind(), Some(NoticeKind::Failure));
        s.notify("ok", now);
        assert_eq!(s.notice_kind(), Some(NoticeKind::Success));
    }

    #[test]
    fn test_notice_expires() {
        let mut s = state();
        let now = Instant::now();
        s.notify("hello", now);
        s.tick(Duration::ZERO, now + Duration::from_secs(1));
        assert_eq!(s.notice(), Some("hello"));
        s.tick(Duration::ZERO, now + NOTICE_DURATION);
        assert!(s.notice().is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn key() -> impl Strategy<Value = KeyCode> {
        prop_oneof![
            any::<char>().prop_map(KeyCode::Char),
            Just(KeyCode::Tab),
            Just(KeyCode::BackTab),
            Just(KeyCode::Left),
            Just(KeyCode::Right),
            Just(KeyCode::Up),
            Just(KeyCode::Down),
            Just(KeyCode::Enter),
            Just(KeyCode::Esc),
            Just(KeyCode::Backspace),
        ]
    }

    proptest! {
        /// Arbitrary key sequences keep the grid cursor in range and only
        /// ever open clients that exist.
        #[test]
        fn key_sequences_keep_state_consistent(keys in prop::collection::vec(key(), 0..64)) {
            let mut state = PanelState::new(DashboardConfig {
                user_name: "amy".to_string(),
                subscription_url: "https://example.com/sub".to_string(),
                email_suffixes: vec!["qq.com".to_string()],
                cooldown_secs: 60,
            });
            let now = Instant::now();
            for key in keys {
                if let Some(DashboardEvent::OpenClient(client)) = state.handle_key(key, now) {
                    prop_assert!(ImportClient::ALL.contains(&client));
                }
                state.tick(Duration::from_millis(100), now);
                prop_assert!(state.grid_cursor() < state.grid().len());
                for view in AuthView::ALL {
                    let form = state.form(view);
                    if let Some(selected) = form.selected() {
                        prop_assert!(selected < form.suggestions().len());
                    }
                    if !view.sends_code() {
                        prop_assert!(form.sender().can_request());
                    }
                }
            }
        }
    }
}
