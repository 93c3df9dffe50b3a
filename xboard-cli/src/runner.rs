//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and the
//! collaborators built from configuration, so command handlers stay small.

use crate::error::CliError;
use std::time::Duration;
use tracing::{info, warn};
use xboard::config::{ConfigFile, DEFAULT_LOG_FILE_NAME};
use xboard::email::EmailSuggester;
use xboard::logging::{init_logging, LoggingGuard};
use xboard::quote::{fetch_or_fallback, HitokotoClient, FALLBACK_QUOTE};

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a runner, loading config and initializing logging.
    ///
    /// When stdout is a TTY, console logging is disabled so events do not
    /// draw over the dashboard.
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| ".".into());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

        let console_enabled = !atty::is(atty::Stream::Stdout);

        let logging_guard = init_logging(&log_dir, &log_file, console_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Xboard v{}", xboard::VERSION);
        info!("Xboard CLI: {} command", command);
    }

    /// Suggestion engine using the configured suffix list.
    pub fn suggester(&self) -> EmailSuggester {
        EmailSuggester::new(self.config.email.suffixes.clone())
    }

    /// Subscription URL, preferring an explicit override.
    pub fn subscription_url(&self, url: Option<String>) -> String {
        url.unwrap_or_else(|| self.config.subscription.url.clone())
    }

    /// Fetch the quote per configuration, blocking.
    pub fn fetch_quote(&self) -> String {
        fetch_configured_quote(&self.config)
    }
}

/// Fetch the quote described by `config`, falling back on any failure or
/// when quotes are disabled.
pub fn fetch_configured_quote(config: &ConfigFile) -> String {
    if !config.quote.enabled {
        return FALLBACK_QUOTE.to_string();
    }

    match HitokotoClient::new(
        config.quote.url.clone(),
        Duration::from_secs(config.quote.timeout),
    ) {
        Ok(client) => fetch_or_fallback(&client),
        Err(e) => {
            warn!(error = %e, "Quote client unavailable");
            FALLBACK_QUOTE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_quote_uses_fallback() {
        let mut config = ConfigFile::default();
        config.quote.enabled = false;
        assert_eq!(fetch_configured_quote(&config), FALLBACK_QUOTE);
    }
}
