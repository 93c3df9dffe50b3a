//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let suffixes = config.email.suffixes.join(", ");
    let quote_enabled = if config.quote.enabled { "true" } else { "false" };

    format!(
        r#"[subscription]
; Subscription link handed to client applications (copy / one-click import)
url = {}

[email]
; Domain suffixes offered when typing an email address, comma separated.
; Suggestions appear in this order.
suffixes = {}

[quote]
; Quote-of-the-day endpoint (must return JSON with a "hitokoto" field)
url = {}
; Set to false to always show the built-in quote
enabled = {}
; Request timeout in seconds (default: 5)
timeout = {}

[panel]
; Name shown in the dashboard welcome line
user_name = {}

[verification]
; Seconds to wait before another verification code can be sent (default: 60)
cooldown = {}

[logging]
; Log file location
file = {}
"#,
        config.subscription.url,
        suffixes,
        config.quote.url,
        quote_enabled,
        config.quote.timeout,
        config.panel.user_name,
        config.verification.cooldown,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
