//! Terminal UI for Xboard.
//!
//! Provides the interactive panel: navigation, dashboard cards, and the
//! import and registration modals.

pub mod dashboard;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardConfig, DashboardEvent};
