use std::path::PathBuf;
use std::process::Command;

use notify_rust::Notification;

use super::CompletionAlert;
use crate::error::PomoError;

/// Sound played when a countdown ends.
pub const DEFAULT_SOUND: &str = "/System/Library/Sounds/Glass.aiff";

/// Player used for the completion sound.
const SOUND_PLAYER: &str = "afplay";

const NOTIFICATION_BODY: &str = "Timer Done!";

/// Desktop notification via `notify-rust` plus a sound through `afplay`.
#[derive(Debug, Clone)]
pub struct DesktopAlert {
    /// Show desktop notifications.
    pub notifications: bool,
    /// Sound file to play; `None` disables the sound.
    pub sound: Option<PathBuf>,
}

impl Default for DesktopAlert {
    fn default() -> Self {
        Self {
            notifications: true,
            sound: Some(PathBuf::from(DEFAULT_SOUND)),
        }
    }
}

impl DesktopAlert {
    /// An alert that does nothing.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            notifications: false,
            sound: None,
        }
    }
}

impl CompletionAlert for DesktopAlert {
    fn notify(&self) -> Result<(), PomoError> {
        if !self.notifications {
            return Ok(());
        }

        Notification::new()
            .summary("pomo")
            .body(NOTIFICATION_BODY)
            .show()
            .map(|_| ())
            .map_err(|e| PomoError::Alert(format!("notification: {e}")))
    }

    fn play_sound(&self) -> Result<(), PomoError> {
        let Some(sound) = &self.sound else {
            return Ok(());
        };

        let status = Command::new(SOUND_PLAYER)
            .arg(sound)
            .status()
            .map_err(|e| PomoError::Alert(format!("{SOUND_PLAYER}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(PomoError::Alert(format!(
                "{SOUND_PLAYER} exited with {status} for {}",
                sound.display()
            )))
        }
    }
}
