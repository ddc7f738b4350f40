//! Configuration and persisted session state for pomo.
//!
//! This module handles locating, loading and merge-saving `~/.pomo-timer.json`.

mod paths;
mod session;

pub use paths::{Paths, SESSION_FILE_NAME};
pub use session::{PartialSessionRecord, SessionRecord, SessionStore, UNSET_TOKEN};
