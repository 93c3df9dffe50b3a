//! Panel model: pages, the navigation shell and the dashboard view models.
//!
//! Everything here is presentation state. Rendering lives in the CLI crate.

mod account;
mod auth;
mod cards;
mod navigation;
mod page;

pub use account::{AccountSummary, TrafficUsage};
pub use auth::AuthView;
pub use cards::{PageHeader, StatsCard};
pub use navigation::{desktop_menu, mobile_grid, MenuItem, NavShell};
pub use page::{Page, ParsePageError};
