//! Dashboard widgets for the TUI.
//!
//! - **Primitives**: Low-level pieces (usage bar, layout helpers)
//! - **Panel Widgets**: Cards, navigation and modals built on them

mod auth_form;
mod import_dialog;
mod menu_grid;
mod nav_bar;
mod page_header;
pub mod primitives;
mod stats_card;
mod welcome;

pub use auth_form::AuthFormWidget;
pub use import_dialog::ImportDialog;
pub use menu_grid::MenuGrid;
pub use nav_bar::NavBar;
pub use page_header::PageHeaderWidget;
pub use stats_card::StatsCardWidget;
pub use welcome::WelcomeCard;
