//! Completion alerts.
//!
//! Fired once when a countdown ends. Both channels are best-effort.

mod desktop;

pub use desktop::{DesktopAlert, DEFAULT_SOUND};

use crate::error::PomoError;

/// Local notification and sound.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionAlert {
    /// Show a desktop notification.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Alert` if the notification could not be shown.
    fn notify(&self) -> Result<(), PomoError>;

    /// Play the completion sound.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Alert` if the sound could not be played.
    fn play_sound(&self) -> Result<(), PomoError>;
}
