//! The persisted session record.
//!
//! Stored as a flat JSON object at `~/.pomo-timer.json`. Every write goes
//! through [`SessionStore::merge`], which reads the whole file, overlays the
//! requested fields and writes the whole file back.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PomoError;

/// Placeholder token written before `--init` has been run.
pub const UNSET_TOKEN: &str = "add your token here";

/// The single session record kept per machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    /// Secret handed to the presence client.
    #[serde(alias = "slack")]
    pub credential_token: String,
    /// Minutes left in the active countdown, `0` when idle.
    #[serde(alias = "timer")]
    pub remaining_minutes: u32,
    /// Any other keys found in the file; carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            credential_token: UNSET_TOKEN.to_string(),
            remaining_minutes: 0,
            extra: Map::new(),
        }
    }
}

impl SessionRecord {
    /// Check whether a real token has been stored.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credential_token != UNSET_TOKEN
    }

    /// Overlay the fields present in `partial`.
    pub fn apply(&mut self, partial: PartialSessionRecord) {
        if let Some(token) = partial.credential_token {
            self.credential_token = token;
        }
        if let Some(minutes) = partial.remaining_minutes {
            self.remaining_minutes = minutes;
        }
    }
}

/// A set of fields to overwrite; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSessionRecord {
    pub credential_token: Option<String>,
    pub remaining_minutes: Option<u32>,
}

impl PartialSessionRecord {
    /// Update only the credential token.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            credential_token: Some(token.into()),
            remaining_minutes: None,
        }
    }

    /// Update only the remaining minutes.
    #[must_use]
    pub const fn remaining(minutes: u32) -> Self {
        Self {
            credential_token: None,
            remaining_minutes: Some(minutes),
        }
    }
}

/// Reads and merge-writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session record.
    ///
    /// A missing file yields the default record and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Storage` if the file exists but cannot be read or
    /// parsed.
    pub fn load(&self) -> Result<SessionRecord, PomoError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionRecord::default()),
            Err(e) => return Err(PomoError::storage(&self.path, format!("read failed: {e}"))),
        };

        serde_json::from_str(&contents)
            .map_err(|e| PomoError::storage(&self.path, format!("parse failed: {e}")))
    }

    /// Overlay `partial` on the stored record, persist, and return the result.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Storage` if the current record cannot be loaded or
    /// the merged record cannot be written.
    pub fn merge(&self, partial: PartialSessionRecord) -> Result<SessionRecord, PomoError> {
        let mut record = self.load()?;
        record.apply(partial);
        self.write(&record)?;
        Ok(record)
    }

    fn write(&self, record: &SessionRecord) -> Result<(), PomoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PomoError::storage(&self.path, format!("create {}: {e}", parent.display()))
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| PomoError::storage(&self.path, format!("serialize failed: {e}")))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| PomoError::storage(&self.path, format!("write failed: {e}")))
    }
}
