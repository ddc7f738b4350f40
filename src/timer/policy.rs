//! Failure policy for the engine's outgoing calls.
//!
//! Every side effect the engine issues is tagged with the phase it belongs to
//! and the kind of call. The table below lists the combinations whose
//! failures are logged and dropped; everything else aborts the phase.

use crate::error::PomoError;

/// Engine transition issuing a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Tick,
    End,
}

/// Kind of outgoing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Persist,
    Status,
    Presence,
    SnoozeStart,
    SnoozeEnd,
    Notify,
    Sound,
}

impl CallKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Persist => "persist",
            Self::Status => "status",
            Self::Presence => "presence",
            Self::SnoozeStart => "snooze start",
            Self::SnoozeEnd => "snooze end",
            Self::Notify => "notification",
            Self::Sound => "sound",
        }
    }
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the error and abort the phase.
    Propagate,
    /// Log the error and carry on.
    Swallow,
}

/// Calls whose failure never aborts their phase.
///
/// Ending a snooze that already expired (or never started) is expected to
/// fail, and alerts are best-effort.
pub const SWALLOWED: &[(Phase, CallKind)] = &[
    (Phase::End, CallKind::Notify),
    (Phase::End, CallKind::Sound),
    (Phase::End, CallKind::SnoozeEnd),
];

/// Look up the policy for a call.
#[must_use]
pub fn policy_for(phase: Phase, kind: CallKind) -> FailurePolicy {
    if SWALLOWED.contains(&(phase, kind)) {
        FailurePolicy::Swallow
    } else {
        FailurePolicy::Propagate
    }
}

/// Apply the policy for `(phase, kind)` to a call result.
///
/// # Errors
///
/// Returns the call's error unless the policy swallows it.
pub fn enforce<T>(phase: Phase, kind: CallKind, result: Result<T, PomoError>) -> Result<(), PomoError> {
    match (policy_for(phase, kind), result) {
        (_, Ok(_)) => Ok(()),
        (FailurePolicy::Propagate, Err(e)) => Err(e),
        (FailurePolicy::Swallow, Err(e)) => {
            log::info!("ignoring failed {kind} during {phase:?}: {e}");
            Ok(())
        }
    }
}
