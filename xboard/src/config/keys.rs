//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, is_http_url, parse_bool, parse_suffix_list};
use super::settings::ConfigFile;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    SubscriptionUrl,
    EmailSuffixes,
    QuoteUrl,
    QuoteEnabled,
    QuoteTimeout,
    PanelUserName,
    VerificationCooldown,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subscription.url" => Ok(ConfigKey::SubscriptionUrl),
            "email.suffixes" => Ok(ConfigKey::EmailSuffixes),
            "quote.url" => Ok(ConfigKey::QuoteUrl),
            "quote.enabled" => Ok(ConfigKey::QuoteEnabled),
            "quote.timeout" => Ok(ConfigKey::QuoteTimeout),
            "panel.user_name" => Ok(ConfigKey::PanelUserName),
            "verification.cooldown" => Ok(ConfigKey::VerificationCooldown),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "subscription.url").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::SubscriptionUrl => "subscription.url",
            ConfigKey::EmailSuffixes => "email.suffixes",
            ConfigKey::QuoteUrl => "quote.url",
            ConfigKey::QuoteEnabled => "quote.enabled",
            ConfigKey::QuoteTimeout => "quote.timeout",
            ConfigKey::PanelUserName => "panel.user_name",
            ConfigKey::VerificationCooldown => "verification.cooldown",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "quote").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "enabled").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::SubscriptionUrl => config.subscription.url.clone(),
            ConfigKey::EmailSuffixes => config.email.suffixes.join(", "),
            ConfigKey::QuoteUrl => config.quote.url.clone(),
            ConfigKey::QuoteEnabled => config.quote.enabled.to_string(),
            ConfigKey::QuoteTimeout => config.quote.timeout.to_string(),
            ConfigKey::PanelUserName => config.panel.user_name.clone(),
            ConfigKey::VerificationCooldown => config.verification.cooldown.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        let failed = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::SubscriptionUrl => config.subscription.url = value.trim().to_string(),
            ConfigKey::EmailSuffixes => {
                config.email.suffixes = parse_suffix_list(value).map_err(failed)?;
            }
            ConfigKey::QuoteUrl => config.quote.url = value.trim().to_string(),
            ConfigKey::QuoteEnabled => {
                config.quote.enabled = parse_bool(value)
                    .ok_or_else(|| failed("must be true/false".to_string()))?;
            }
            ConfigKey::QuoteTimeout => {
                config.quote.timeout = value
                    .trim()
                    .parse()
                    .map_err(|_| failed("must be a positive integer".to_string()))?;
            }
            ConfigKey::PanelUserName => config.panel.user_name = value.trim().to_string(),
            ConfigKey::VerificationCooldown => {
                config.verification.cooldown = value
                    .trim()
                    .parse()
                    .map_err(|_| failed("must be a positive integer".to_string()))?;
            }
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value.trim()),
        }
        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::SubscriptionUrl => Box::new(UrlSpec),
            ConfigKey::EmailSuffixes => Box::new(SuffixListSpec),
            ConfigKey::QuoteUrl => Box::new(UrlSpec),
            ConfigKey::QuoteEnabled => Box::new(BooleanSpec),
            ConfigKey::QuoteTimeout => Box::new(PositiveIntegerSpec),
            ConfigKey::PanelUserName => Box::new(NonEmptySpec),
            ConfigKey::VerificationCooldown => Box::new(PositiveIntegerSpec),
            ConfigKey::LoggingFile => Box::new(NonEmptySpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::SubscriptionUrl,
            ConfigKey::EmailSuffixes,
            ConfigKey::QuoteUrl,
            ConfigKey::QuoteEnabled,
            ConfigKey::QuoteTimeout,
            ConfigKey::PanelUserName,
            ConfigKey::VerificationCooldown,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification for http(s) URLs.
struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if is_http_url(value.trim()) {
            Ok(())
        } else {
            Err("must be a URL starting with 'http://' or 'https://'".to_string())
        }
    }
}

/// Specification for comma-separated domain suffixes.
struct SuffixListSpec;

impl ValueSpecification for SuffixListSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_suffix_list(value).map(|_| ())
    }
}

/// Specification for positive integer values.
struct PositiveIntegerSpec;

impl ValueSpecification for PositiveIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        }
    }
}

/// Specification for boolean values.
struct BooleanSpec;

impl ValueSpecification for BooleanSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_bool(value)
            .map(|_| ())
            .ok_or_else(|| "must be true/false, yes/no, 1/0, or on/off".to_string())
    }
}

/// Specification for non-empty values.
struct NonEmptySpec;

impl ValueSpecification for NonEmptySpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "subscription.url".parse::<ConfigKey>().unwrap(),
            ConfigKey::SubscriptionUrl
        );
        assert_eq!(
            "EMAIL.SUFFIXES".parse::<ConfigKey>().unwrap(),
            ConfigKey::EmailSuffixes
        );
        assert!("email.domains".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_key_name_parts() {
        let key = ConfigKey::VerificationCooldown;
        assert_eq!(key.section(), "verification");
        assert_eq!(key.key_name(), "cooldown");
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::QuoteEnabled.get(&config), "true");
        assert!(ConfigKey::EmailSuffixes.get(&config).starts_with("qq.com, 163.com"));
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();
        ConfigKey::EmailSuffixes
            .set(&mut config, "gmail.com,proton.me")
            .unwrap();
        assert_eq!(config.email.suffixes, vec!["gmail.com", "proton.me"]);

        ConfigKey::QuoteEnabled.set(&mut config, "no").unwrap();
        assert!(!config.quote.enabled);
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::SubscriptionUrl
            .set(&mut config, "clash://install-config")
            .is_err());
        assert!(ConfigKey::VerificationCooldown.set(&mut config, "0").is_err());
        assert!(ConfigKey::PanelUserName.set(&mut config, "  ").is_err());
        assert_eq!(config.verification.cooldown, 60);
    }

    #[test]
    fn test_all_keys_round_trip_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }
}
