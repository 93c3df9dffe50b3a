//! System clipboard access.
//!
//! Copying is best effort: callers get a `Result` and decide whether to show
//! a confirmation or a notice. Nothing here retries.
//!
//! The [`Clipboard`] trait is the seam used by the panel so tests can run
//! without a desktop session.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

/// Clipboard errors.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard helper program was found for this platform.
    #[error("No clipboard helper available (tried: {0})")]
    NoBackend(String),

    /// The helper program could not be started or written to.
    #[error("Failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The helper program ran but reported failure.
    #[error("{program} exited with {status}")]
    Rejected { program: String, status: String },
}

/// Something that can take text for the clipboard.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text`, logging the outcome.
pub fn copy_text(clipboard: &dyn Clipboard, text: &str) -> Result<(), ClipboardError> {
    match clipboard.set_text(text) {
        Ok(()) => {
            debug!(chars = text.chars().count(), "Copied text to clipboard");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Clipboard copy failed");
            Err(e)
        }
    }
}

/// Clipboard backed by the platform's command-line helper.
///
/// macOS uses `pbcopy`, Windows `clip`, and other systems try `wl-copy`,
/// `xclip` and `xsel` in that order. A helper that is missing or fails hands
/// over to the next one; only when every helper has been tried is an error
/// returned.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            candidates: platform_candidates(),
        }
    }

    /// Use a specific helper program instead of the platform defaults.
    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self {
            candidates: vec![(
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            )],
        }
    }

    /// Append a helper to try after the current ones.
    pub fn or_program(mut self, program: &str, args: &[&str]) -> Self {
        self.candidates.push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        self
    }

    fn run(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let io_err = |source| ClipboardError::Io {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(io_err)?;
        }

        let status = child.wait().map_err(io_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Rejected {
                program: program.to_string(),
                status: status.to_string(),
            })
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut missing = Vec::new();
        let mut last_failure = None;
        for (program, args) in &self.candidates {
            match Self::run(program, args, text) {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Io { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    missing.push(program.clone());
                }
                Err(e) => {
                    debug!(program = %program, error = %e, "Clipboard helper failed, trying next");
                    last_failure = Some(e);
                }
            }
        }
        Err(last_failure.unwrap_or_else(|| ClipboardError::NoBackend(missing.join(", "))))
    }
}

fn platform_candidates() -> Vec<(String, Vec<String>)> {
    let entry = |program: &str, args: &[&str]| {
        (
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        )
    };

    if cfg!(target_os = "macos") {
        vec![entry("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![entry("clip", &[])]
    } else {
        let mut candidates = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            candidates.push(entry("wl-copy", &[]));
        }
        candidates.push(entry("xclip", &["-selection", "clipboard"]));
        candidates.push(entry("xsel", &["--clipboard", "--input"]));
        candidates
    }
}
