//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete panel configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Subscription link handed to client applications
    pub subscription: SubscriptionSettings,
    /// Email autocomplete settings
    pub email: EmailSettings,
    /// Quote-of-the-day settings
    pub quote: QuoteSettings,
    /// Panel display settings
    pub panel: PanelSettings,
    /// Verification code settings
    pub verification: VerificationSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Subscription configuration.
#[derive(Debug, Clone)]
pub struct SubscriptionSettings {
    /// Subscription URL copied to the clipboard or embedded in deep links.
    pub url: String,
}

/// Email autocomplete configuration.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    /// Domain suffixes offered as completions, in display order.
    pub suffixes: Vec<String>,
}

/// Quote-of-the-day configuration.
#[derive(Debug, Clone)]
pub struct QuoteSettings {
    /// Endpoint returning `{ "hitokoto": "..." }`.
    pub url: String,
    /// When false the fallback quote is shown without a request.
    pub enabled: bool,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Panel display configuration.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    /// Name used in the dashboard welcome line.
    pub user_name: String,
}

/// Verification code configuration.
#[derive(Debug, Clone)]
pub struct VerificationSettings {
    /// Seconds before another code can be requested.
    pub cooldown: u32,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
