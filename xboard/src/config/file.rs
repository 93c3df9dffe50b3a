//! Configuration file handling for ~/.xboard/config.ini.
//!
//! A missing file means "all defaults". Writing always emits the full file,
//! so a saved config documents every key.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Errors raised while reading, validating or writing the panel config.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Cannot read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Cannot write config file: {0}")]
    WriteError(String),

    /// A value rejected by its key's validation.
    #[error("Invalid value for {section}.{key}: '{value}' ({reason})")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Cannot create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Read `~/.xboard/config.ini`, falling back to defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Read the config at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Write the full config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// `~/.xboard`, or `./.xboard` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".xboard")
}

pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
