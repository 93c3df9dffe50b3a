//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use xboard::clipboard::ClipboardError;
use xboard::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Configuration file could not be read or written
    ConfigFile(ConfigFileError),
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Clipboard copy failed
    Clipboard(ClipboardError),
    /// Terminal UI error
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Clipboard(ClipboardError::NoBackend(_)) => {
                eprintln!();
                eprintln!("No clipboard helper was found. Install one of:");
                eprintln!("  Wayland: wl-clipboard (wl-copy)");
                eprintln!("  X11:     xclip or xsel");
                eprintln!("Or print the link instead: xboard link <CLIENT>");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { section, key, .. }) => {
                eprintln!();
                eprintln!(
                    "Fix it with: xboard config set {}.{} <VALUE>",
                    section, key
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Clipboard(e) => write!(f, "Failed to copy to clipboard: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Clipboard(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<ClipboardError> for CliError {
    fn from(e: ClipboardError) -> Self {
        CliError::Clipboard(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Terminal(e)
    }
}
