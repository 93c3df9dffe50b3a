//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::email::DEFAULT_SUFFIXES;

/// Subscription URL used until one is configured.
pub const DEFAULT_SUBSCRIPTION_URL: &str = "https://example.com/api/v1/subscribe?token=123456";

/// Hitokoto public endpoint.
pub const DEFAULT_QUOTE_URL: &str = "https://v1.hitokoto.cn/";

/// Quote request timeout in seconds.
pub const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 5;

/// Display name on the welcome card.
pub const DEFAULT_USER_NAME: &str = "吴彦祖";

/// Verification code cooldown in seconds.
pub const DEFAULT_VERIFICATION_COOLDOWN_SECS: u32 = 60;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "xboard.log";

/// Default log file path (`~/.xboard/xboard.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            subscription: SubscriptionSettings {
                url: DEFAULT_SUBSCRIPTION_URL.to_string(),
            },
            email: EmailSettings {
                suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            },
            quote: QuoteSettings {
                url: DEFAULT_QUOTE_URL.to_string(),
                enabled: true,
                timeout: DEFAULT_QUOTE_TIMEOUT_SECS,
            },
            panel: PanelSettings {
                user_name: DEFAULT_USER_NAME.to_string(),
            },
            verification: VerificationSettings {
                cooldown: DEFAULT_VERIFICATION_COOLDOWN_SECS,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
