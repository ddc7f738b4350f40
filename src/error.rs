//! Error types for pomo.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while running a pomo session.
#[derive(Error, Debug)]
pub enum PomoError {
    /// The credential token still holds the placeholder value.
    #[error(
        "tokens have not been set up correctly\n\
         please use `--init` flag.\n\
         see `--help` for details"
    )]
    NotConfigured,

    /// A user-supplied value was rejected before anything ran.
    #[error("{0}")]
    Validation(String),

    /// The session file exists but could not be read, parsed, or written.
    #[error("session file {}: {message}", path.display())]
    Storage { path: PathBuf, message: String },

    /// A presence service call failed.
    #[error("presence call `{operation}` failed: {message}")]
    Signaling { operation: String, message: String },

    /// A completion alert could not be delivered.
    #[error("alert failed: {0}")]
    Alert(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PomoError {
    /// Build a storage error for `path`.
    pub fn storage(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Build a signaling error from a client's stderr.
    pub fn signaling(operation: impl Into<String>, stderr: &str) -> Self {
        let message = stderr.trim();
        Self::Signaling {
            operation: operation.into(),
            message: if message.is_empty() {
                "client exited with an error".to_string()
            } else {
                message.to_string()
            },
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            _ => 1,
        }
    }
}
