//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! Every key goes through [`ConfigKey::set`], so a hand-edited file is held
//! to the same rules as `xboard config set`.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::keys::{ConfigKey, ConfigKeyError};
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Blank values keep the default.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for key in ConfigKey::all() {
        let Some(value) = ini
            .section(Some(key.section()))
            .and_then(|section| section.get(key.key_name()))
        else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }

        key.set(&mut config, value).map_err(|e| {
            let reason = match e {
                ConfigKeyError::ValidationFailed { reason, .. } => reason,
                other => other.to_string(),
            };
            invalid(key.section(), key.key_name(), value, &reason)
        })?;
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a comma-separated suffix list, keeping order.
///
/// A leading `@` on an entry is dropped so `@gmail.com` and `gmail.com`
/// mean the same thing.
pub(super) fn parse_suffix_list(value: &str) -> Result<Vec<String>, String> {
    let mut suffixes = Vec::new();
    for raw in value.split(',') {
        let entry = raw.trim();
        let entry = entry.strip_prefix('@').unwrap_or(entry);
        if entry.is_empty() {
            continue;
        }
        if entry.contains('@') || entry.chars().any(char::is_whitespace) {
            return Err(format!("'{}' is not a domain suffix", entry));
        }
        suffixes.push(entry.to_string());
    }

    if suffixes.is_empty() {
        return Err("must list at least one domain suffix".to_string());
    }
    Ok(suffixes)
}

/// Parse the boolean spellings accepted in config.ini.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

pub(super) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(text).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.email.suffixes.len(), 10);
        assert_eq!(config.verification.cooldown, 60);
    }

    #[test]
    fn test_suffix_list_keeps_order() {
        let config = parse("[email]\nsuffixes = proton.me, @gmail.com ,qq.com\n").unwrap();
        assert_eq!(config.email.suffixes, vec!["proton.me", "gmail.com", "qq.com"]);
    }

    #[test]
    fn test_suffix_list_rejects_addresses() {
        assert!(parse("[email]\nsuffixes = bob@qq.com\n").is_err());
        assert!(parse("[email]\nsuffixes = , ,\n").is_err());
    }

    #[test]
    fn test_subscription_url_must_be_http() {
        assert!(parse("[subscription]\nurl = ftp://example.com\n").is_err());
        let config = parse("[subscription]\nurl = https://sub.example.com/a?b=c\n").unwrap();
        assert_eq!(config.subscription.url, "https://sub.example.com/a?b=c");
    }

    #[test]
    fn test_quote_settings() {
        let config = parse("[quote]\nenabled = off\ntimeout = 2\n").unwrap();
        assert!(!config.quote.enabled);
        assert_eq!(config.quote.timeout, 2);
        assert!(parse("[quote]\nenabled = maybe\n").is_err());
    }

    #[test]
    fn test_zero_durations_rejected_on_load() {
        match parse("[verification]\ncooldown = 0\n") {
            Err(ConfigFileError::InvalidValue { section, key, value, .. }) => {
                assert_eq!(section, "verification");
                assert_eq!(key, "cooldown");
                assert_eq!(value, "0");
            }
            other => panic!("expected invalid cooldown, got {:?}", other),
        }
        assert!(parse("[quote]\ntimeout = 0\n").is_err());
    }

    #[test]
    fn test_quote_url_must_be_http() {
        match parse("[quote]\nurl = not-a-url\n") {
            Err(ConfigFileError::InvalidValue { section, key, .. }) => {
                assert_eq!((section.as_str(), key.as_str()), ("quote", "url"));
            }
            other => panic!("expected invalid quote url, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = parse("[panel]\nuser_name =   \n[verification]\ncooldown =\n").unwrap();
        let defaults = ConfigFile::default();
        assert_eq!(config.panel.user_name, defaults.panel.user_name);
        assert_eq!(config.verification.cooldown, defaults.verification.cooldown);
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }
}
