//! Configuration for the Xboard panel.
//!
//! Settings live in `~/.xboard/config.ini`. Each `[section]` maps to one
//! settings struct, and every key can be read or written by name through
//! [`ConfigKey`].
//!
//! # Example
//!
//! ```
//! use xboard::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "verification.cooldown".parse().unwrap();
//! key.set(&mut config, "30").unwrap();
//! assert_eq!(config.verification.cooldown, 30);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, EmailSettings, LoggingSettings, PanelSettings, QuoteSettings,
    SubscriptionSettings, VerificationSettings,
};
