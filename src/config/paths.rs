//! Path resolution for pomo's session file.
//!
//! pomo keeps a single file in the user's home directory:
//! - `.pomo-timer.json` - credential token and remaining minutes

use std::path::PathBuf;

use crate::error::PomoError;

/// File name of the session record inside the home directory.
pub const SESSION_FILE_NAME: &str = ".pomo-timer.json";

/// Paths used by pomo.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Home directory, also the working directory for the presence client.
    pub home: PathBuf,
    /// Session file: `~/.pomo-timer.json`
    pub session_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomoError::Validation("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home)))
    }

    /// Create paths with a custom home directory (useful for testing).
    #[must_use]
    pub fn with_root(home: PathBuf) -> Self {
        Self {
            session_file: home.join(SESSION_FILE_NAME),
            home,
        }
    }

    /// Override the session file location, keeping the home directory.
    #[must_use]
    pub fn with_session_file(mut self, session_file: PathBuf) -> Self {
        self.session_file = session_file;
        self
    }
}
