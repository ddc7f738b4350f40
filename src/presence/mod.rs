//! Presence signaling.
//!
//! The timer announces itself on an external service through three calls:
//! a status message, a presence toggle and a snooze (do-not-disturb) window.

mod slack;

pub use slack::SlackCli;

use crate::error::PomoError;

/// Presence indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Available.
    Active,
    /// Heads-down; shown as away.
    Away,
}

impl Presence {
    /// Value understood by the presence client.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Away => "away",
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations against the presence service.
///
/// Implementations carry their own credential token. Every call is an upsert
/// and may be repeated safely.
#[cfg_attr(test, mockall::automock)]
pub trait PresenceSignaler {
    /// Set the status text and emoji.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Signaling` if the service rejects the call.
    fn set_status(&self, message: &str, emoji: &str) -> Result<(), PomoError>;

    /// Set the presence indicator.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Signaling` if the service rejects the call.
    fn set_presence(&self, presence: Presence) -> Result<(), PomoError>;

    /// Start a snooze of `minutes`, or end the current one when `minutes` is 0.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Signaling` if the service rejects the call.
    fn set_snooze(&self, minutes: u32) -> Result<(), PomoError>;
}
