use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use super::{Presence, PresenceSignaler};
use crate::error::PomoError;

/// Environment variable the `slack` client reads its token from.
const TOKEN_VAR: &str = "SLACK_CLI_TOKEN";

/// Presence signaler backed by the `slack` command-line client.
#[derive(Clone)]
pub struct SlackCli {
    program: OsString,
    token: String,
    cwd: PathBuf,
}

impl std::fmt::Debug for SlackCli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackCli")
            .field("program", &self.program)
            .field("cwd", &self.cwd)
            .finish_non_exhaustive()
    }
}

impl SlackCli {
    /// Create a client that runs `program` with `token` from directory `cwd`.
    pub fn new(program: impl Into<OsString>, token: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            token: token.into(),
            cwd: cwd.into(),
        }
    }

    /// Arguments for a status update.
    #[must_use]
    pub fn status_args(message: &str, emoji: &str) -> Vec<String> {
        vec![
            "status".to_string(),
            "edit".to_string(),
            "--text".to_string(),
            message.to_string(),
            "--emoji".to_string(),
            emoji.to_string(),
        ]
    }

    /// Arguments for a presence change.
    #[must_use]
    pub fn presence_args(presence: Presence) -> Vec<String> {
        vec!["presence".to_string(), presence.as_str().to_string()]
    }

    /// Arguments for starting or ending a snooze.
    #[must_use]
    pub fn snooze_args(minutes: u32) -> Vec<String> {
        if minutes == 0 {
            vec!["snooze".to_string(), "end".to_string()]
        } else {
            vec![
                "snooze".to_string(),
                "start".to_string(),
                "--minutes".to_string(),
                minutes.to_string(),
            ]
        }
    }

    /// Run the client with `args`, discarding its output.
    fn execute(&self, args: &[String]) -> Result<(), PomoError> {
        let operation = args.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
        log::debug!("running {:?} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .env(TOKEN_VAR, &self.token)
            .current_dir(&self.cwd)
            .output()
            .map_err(|e| PomoError::signaling(&operation, &e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PomoError::signaling(operation, &stderr));
        }

        Ok(())
    }
}

impl PresenceSignaler for SlackCli {
    fn set_status(&self, message: &str, emoji: &str) -> Result<(), PomoError> {
        self.execute(&Self::status_args(message, emoji))
    }

    fn set_presence(&self, presence: Presence) -> Result<(), PomoError> {
        self.execute(&Self::presence_args(presence))
    }

    fn set_snooze(&self, minutes: u32) -> Result<(), PomoError> {
        self.execute(&Self::snooze_args(minutes))
    }
}
