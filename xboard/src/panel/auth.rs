//! Account forms shown outside the navigation shell.

use std::fmt;

use super::page::route_key;

/// The three account forms: sign in, sign up and password recovery.
///
/// Each one has an email field backed by the suggestion engine. Register and
/// recovery also carry a send-code button with its own cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthView {
    Login,
    Register,
    ForgotPassword,
}

impl AuthView {
    pub const ALL: [AuthView; 3] = [AuthView::Login, AuthView::Register, AuthView::ForgotPassword];

    pub fn key(&self) -> &'static str {
        match self {
            AuthView::Login => "login",
            AuthView::Register => "register",
            AuthView::ForgotPassword => "forgot-password",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.key())
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "账户密码登录",
            AuthView::Register => "创建新账户",
            AuthView::ForgotPassword => "找回密码",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthView::Login => "使用注册邮箱登录面板",
            AuthView::Register => "加入我们，开启全新体验。",
            AuthView::ForgotPassword => "请输入您的注册邮箱和验证码来重置密码。",
        }
    }

    /// Whether the form has a send-code button.
    pub fn sends_code(&self) -> bool {
        !matches!(self, AuthView::Login)
    }

    /// Resolve a route path such as `/forgot-password`.
    pub fn from_path(path: &str) -> Option<AuthView> {
        let key = route_key(path);
        AuthView::ALL.iter().copied().find(|v| v.key() == key)
    }
}

impl fmt::Display for AuthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
