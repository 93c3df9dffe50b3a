//! Reusable UI primitive components.
//!
//! ## Components
//!
//! - **UsageBar**: Horizontal bar for a percentage (traffic remaining)
//! - **Format**: Layout helpers and value formatters

pub mod format;
mod usage_bar;

pub use format::{centered_rect, format_percent};
pub use usage_bar::UsageBar;
