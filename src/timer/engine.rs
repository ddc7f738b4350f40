//! The countdown state machine.
//!
//! `Idle -> Running -> Ended`. Ticks are supplied from outside through
//! [`TimerEngine::tick`] or a [`Ticker`], so the engine never reads a clock.

use super::policy::{enforce, CallKind, Phase};
use super::ticker::Ticker;
use crate::alert::CompletionAlert;
use crate::config::{PartialSessionRecord, SessionStore};
use crate::error::PomoError;
use crate::presence::{Presence, PresenceSignaler};

/// Status emoji while a countdown runs.
pub const WORKING_EMOJI: &str = ":tomato:";
/// Status emoji once the countdown is over.
pub const FREE_EMOJI: &str = ":pickle_rick:";
/// Status text once the countdown is over.
pub const FREE_STATUS: &str = "free";

/// Status text while `minutes` remain.
#[must_use]
pub fn free_in(minutes: u32) -> String {
    format!("free in {minutes} mins")
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Nothing started in this process.
    Idle,
    /// Counting down.
    Running { remaining: u32 },
    /// The end sequence has completed.
    Ended,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this many minutes left.
    Continued { remaining: u32 },
    /// The countdown reached zero and the end sequence ran.
    Ended,
}

/// Drives one countdown against the session store, presence service and
/// completion alert.
pub struct TimerEngine<'a> {
    store: &'a SessionStore,
    signaler: &'a dyn PresenceSignaler,
    alert: &'a dyn CompletionAlert,
    state: TimerState,
}

impl<'a> TimerEngine<'a> {
    /// Create an idle engine.
    pub fn new(
        store: &'a SessionStore,
        signaler: &'a dyn PresenceSignaler,
        alert: &'a dyn CompletionAlert,
    ) -> Self {
        Self {
            store,
            signaler,
            alert,
            state: TimerState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Begin a countdown of `minutes`.
    ///
    /// Persists the remaining time, sets the status, goes away and starts a
    /// snooze of the same length.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Validation` if `minutes` is zero or the engine is not
    /// idle, and any storage or signaling error from the start sequence.
    pub fn start(&mut self, minutes: u32) -> Result<(), PomoError> {
        if minutes == 0 {
            return Err(PomoError::Validation(
                "a countdown needs at least 1 minute".to_string(),
            ));
        }
        if self.state != TimerState::Idle {
            return Err(PomoError::Validation(
                "this timer has already been started".to_string(),
            ));
        }

        log::info!("starting {minutes} minute countdown");
        enforce(
            Phase::Start,
            CallKind::Persist,
            self.store.merge(PartialSessionRecord::remaining(minutes)),
        )?;
        self.state = TimerState::Running { remaining: minutes };

        enforce(
            Phase::Start,
            CallKind::Status,
            self.signaler.set_status(&free_in(minutes), WORKING_EMOJI),
        )?;
        enforce(
            Phase::Start,
            CallKind::Presence,
            self.signaler.set_presence(Presence::Away),
        )?;
        enforce(
            Phase::Start,
            CallKind::SnoozeStart,
            self.signaler.set_snooze(minutes),
        )
    }

    /// Advance the countdown by one minute.
    ///
    /// On the last minute the end sequence runs instead of a status update.
    /// A failure leaves the decremented value in place; the next tick carries
    /// on from there.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Validation` if no countdown was started, and any
    /// storage or signaling error from this tick.
    pub fn tick(&mut self) -> Result<TickOutcome, PomoError> {
        let remaining = match self.state {
            TimerState::Running { remaining } => remaining.saturating_sub(1),
            TimerState::Ended => return Ok(TickOutcome::Ended),
            TimerState::Idle => {
                return Err(PomoError::Validation("no countdown is running".to_string()))
            }
        };
        self.state = TimerState::Running { remaining };
        log::debug!("tick, {remaining} minutes left");

        if remaining < 1 {
            self.end()?;
            return Ok(TickOutcome::Ended);
        }

        enforce(
            Phase::Tick,
            CallKind::Persist,
            self.store.merge(PartialSessionRecord::remaining(remaining)),
        )?;
        enforce(
            Phase::Tick,
            CallKind::Status,
            self.signaler.set_status(&free_in(remaining), WORKING_EMOJI),
        )?;

        Ok(TickOutcome::Continued { remaining })
    }

    /// Run the end sequence: alert, mark free, come back, end the snooze and
    /// clear the remaining time.
    ///
    /// Safe to call from any state, including when nothing is running.
    ///
    /// # Errors
    ///
    /// Returns any storage error, or a signaling error from the status or
    /// presence call. Alert failures and a failed snooze end are ignored.
    pub fn end(&mut self) -> Result<(), PomoError> {
        log::info!("ending countdown");

        enforce(Phase::End, CallKind::Notify, self.alert.notify())?;
        enforce(Phase::End, CallKind::Sound, self.alert.play_sound())?;
        enforce(
            Phase::End,
            CallKind::Status,
            self.signaler.set_status(FREE_STATUS, FREE_EMOJI),
        )?;
        enforce(
            Phase::End,
            CallKind::Presence,
            self.signaler.set_presence(Presence::Active),
        )?;
        enforce(Phase::End, CallKind::SnoozeEnd, self.signaler.set_snooze(0))?;
        enforce(
            Phase::End,
            CallKind::Persist,
            self.store.merge(PartialSessionRecord::remaining(0)),
        )?;

        self.state = TimerState::Ended;
        Ok(())
    }

    /// Tick on every event from `ticker` until the countdown ends.
    ///
    /// `on_tick` sees each successful tick. A failed tick is logged and the
    /// loop waits for the next one. Returns once the engine has ended or the
    /// ticker is exhausted.
    pub fn run(&mut self, ticker: &mut dyn Ticker, mut on_tick: impl FnMut(TickOutcome)) {
        while matches!(self.state, TimerState::Running { .. }) {
            if !ticker.wait() {
                log::warn!("tick source closed before the countdown finished");
                return;
            }

            match self.tick() {
                Ok(outcome) => on_tick(outcome),
                Err(e) => log::warn!("tick failed: {e}"),
            }
        }
    }
}
