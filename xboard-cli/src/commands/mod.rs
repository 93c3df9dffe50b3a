//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`copy`] - Copy the subscription URL to the clipboard
//! - [`greeting`] - Time-of-day greeting
//! - [`link`] - Client import deep links
//! - [`quote`] - Quote of the day
//! - [`suggest`] - Email address suggestions

pub mod config;
pub mod copy;
pub mod greeting;
pub mod link;
pub mod quote;
pub mod suggest;
