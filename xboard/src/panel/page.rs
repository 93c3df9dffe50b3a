//! Routable pages.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every page the panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Plan,
    Node,
    Ticket,
    Knowledge,
    Doc,
    Invite,
    Profile,
    Traffic,
    Orders,
    GiftCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown page '{0}'")]
pub struct ParsePageError(pub String);

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Plan,
        Page::Node,
        Page::Ticket,
        Page::Knowledge,
        Page::Doc,
        Page::Invite,
        Page::Profile,
        Page::Traffic,
        Page::Orders,
        Page::GiftCard,
    ];

    /// Route key, the path segment without the leading slash.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Plan => "plan",
            Page::Node => "node",
            Page::Ticket => "ticket",
            Page::Knowledge => "knowledge",
            Page::Doc => "doc",
            Page::Invite => "invite",
            Page::Profile => "profile",
            Page::Traffic => "traffic",
            Page::Orders => "orders",
            Page::GiftCard => "giftcard",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.key())
    }

    /// Default label used in page headers.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "仪表盘",
            Page::Plan => "购买订阅",
            Page::Node => "节点列表",
            Page::Ticket => "工单",
            Page::Knowledge => "知识库",
            Page::Doc => "文档",
            Page::Invite => "邀请返佣",
            Page::Profile => "个人中心",
            Page::Traffic => "流量明细",
            Page::Orders => "我的订单",
            Page::GiftCard => "礼品卡",
        }
    }

    /// Resolve a route path.
    ///
    /// The root path and the empty string redirect to the dashboard. A single
    /// leading and trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let key = route_key(path);
        if key.is_empty() {
            return Some(Page::Dashboard);
        }
        Page::ALL.iter().copied().find(|p| p.key() == key)
    }
}

/// Strip surrounding whitespace and one leading and trailing slash.
pub(super) fn route_key(path: &str) -> &str {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_path(s).ok_or_else(|| ParsePageError(s.to_string()))
    }
}
