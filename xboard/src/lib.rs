//! Xboard - a terminal user panel for a subscription service
//!
//! The library holds everything that is not drawing: the email autocomplete
//! helper, deep-link construction for client apps, the time-of-day greeting,
//! the verification-code cooldown, the navigation model and the plumbing
//! (configuration, logging, clipboard, quote fetch).
//!
//! # Quick Tour
//!
//! ```
//! use xboard::deeplink::ImportClient;
//! use xboard::email::suggest;
//! use xboard::greeting::greeting_for;
//!
//! assert_eq!(suggest(Some("alice"))[2].value, "alice@gmail.com");
//! assert_eq!(greeting_for(9).text(), "早上好");
//! assert!(ImportClient::Hiddify
//!     .deep_link("https://example.com/sub")
//!     .starts_with("hiddify://install-config?url=https%3A%2F%2F"));
//! ```

pub mod clipboard;
pub mod config;
pub mod cooldown;
pub mod deeplink;
pub mod email;
pub mod greeting;
pub mod logging;
pub mod panel;
pub mod quote;

/// Version of the Xboard library and CLI.
///
/// Synchronized across the workspace via `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
