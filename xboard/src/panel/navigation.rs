//! Navigation shell.
//!
//! One shell type serves both layouts: the desktop top bar and the mobile
//! grid differ only in the menu they are built with.

use super::page::Page;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub page: Page,
    pub label: String,
}

impl MenuItem {
    pub fn new(page: Page, label: impl Into<String>) -> Self {
        Self {
            page,
            label: label.into(),
        }
    }
}

impl From<Page> for MenuItem {
    fn from(page: Page) -> Self {
        Self::new(page, page.label())
    }
}

/// Top bar menu.
pub fn desktop_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(Page::Dashboard, "仪表盘"),
        MenuItem::new(Page::Plan, "购买订阅"),
        MenuItem::new(Page::Node, "节点列表"),
        MenuItem::new(Page::Ticket, "工单"),
    ]
}

/// Slide-out grid shown by the mobile menu button.
pub fn mobile_grid() -> Vec<MenuItem> {
    vec![
        MenuItem::new(Page::Node, "节点列表"),
        MenuItem::new(Page::Plan, "我的套餐"),
        MenuItem::new(Page::Traffic, "流量明细"),
        MenuItem::new(Page::Orders, "我的订单"),
        MenuItem::new(Page::GiftCard, "礼品卡"),
        MenuItem::new(Page::Invite, "邀请返佣"),
        MenuItem::new(Page::Ticket, "工单"),
        MenuItem::new(Page::Doc, "文档"),
        MenuItem::new(Page::Profile, "个人中心"),
    ]
}

/// Current page plus the menu used to move between pages.
///
/// The current page does not have to appear in the menu (e.g. the dashboard
/// is reachable from the grid only through the top bar).
#[derive(Debug, Clone)]
pub struct NavShell {
    menu: Vec<MenuItem>,
    current: Page,
    mobile_menu_open: bool,
}

impl NavShell {
    pub fn new(menu: Vec<MenuItem>) -> Self {
        Self {
            menu,
            current: Page::Dashboard,
            mobile_menu_open: false,
        }
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_selected(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Go to `page` and close the mobile menu.
    pub fn navigate(&mut self, page: Page) {
        if self.current != page {
            debug!(from = self.current.key(), to = page.key(), "Navigate");
        }
        self.current = page;
        self.mobile_menu_open = false;
    }

    /// Navigate by route path. Unknown paths leave the shell unchanged.
    pub fn navigate_path(&mut self, path: &str) -> Option<Page> {
        let page = Page::from_path(path)?;
        self.navigate(page);
        Some(page)
    }

    /// Move to the next menu entry, wrapping around.
    pub fn next(&mut self) {
        if let Some(page) = self.neighbour(1) {
            self.navigate(page);
        }
    }

    /// Move to the previous menu entry, wrapping around.
    pub fn previous(&mut self) {
        if let Some(page) = self.neighbour(-1) {
            self.navigate(page);
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Index of the current page in the menu.
    pub fn selected_index(&self) -> Option<usize> {
        self.menu.iter().position(|item| item.page == self.current)
    }

    fn neighbour(&self, step: isize) -> Option<Page> {
        let len = self.menu.len();
        if len == 0 {
            return None;
        }
        let index = match self.selected_index() {
            Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
            // Off-menu pages enter the menu at either end.
            None if step > 0 => 0,
            None => len - 1,
        };
        Some(self.menu[index].page)
    }
}

impl Default for NavShell {
    fn default() -> Self {
        Self::new(desktop_menu())
    }
}
