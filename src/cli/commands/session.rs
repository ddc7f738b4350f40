//! Session command implementation.
//!
//! Picks between initialize, complete and start, and drives the timer engine.

use std::io::Write;

use colored::Colorize;

use super::Mode;
use crate::alert::CompletionAlert;
use crate::config::{PartialSessionRecord, SessionRecord, SessionStore};
use crate::error::PomoError;
use crate::presence::PresenceSignaler;
use crate::timer::{TickOutcome, Ticker, TimerEngine, TimerState};

/// Builds a presence signaler for a credential token.
pub type Connect<'a> = Box<dyn Fn(&str) -> Box<dyn PresenceSignaler> + 'a>;

/// Parse the `minutes` argument.
///
/// # Errors
///
/// Returns `PomoError::Validation` unless `raw` is a whole number of at least 1.
pub fn parse_minutes(raw: &str) -> Result<u32, PomoError> {
    let minutes: u32 = raw.trim().parse().map_err(|_| {
        PomoError::Validation(format!(
            "argument \"minutes\" must be a number, you passed: {raw}"
        ))
    })?;

    if minutes == 0 {
        return Err(PomoError::Validation(
            "argument \"minutes\" must be at least 1".to_string(),
        ));
    }

    Ok(minutes)
}

/// Refuse to continue while the token is still the placeholder.
///
/// # Errors
///
/// Returns `PomoError::NotConfigured` if `--init` has not been run.
pub fn ensure_configured(record: &SessionRecord) -> Result<(), PomoError> {
    if record.is_configured() {
        Ok(())
    } else {
        Err(PomoError::NotConfigured)
    }
}

/// Entry point for one pomo invocation.
pub struct SessionController<'a> {
    store: &'a SessionStore,
    connect: Connect<'a>,
    alert: &'a dyn CompletionAlert,
}

impl<'a> SessionController<'a> {
    pub fn new(
        store: &'a SessionStore,
        connect: impl Fn(&str) -> Box<dyn PresenceSignaler> + 'a,
        alert: &'a dyn CompletionAlert,
    ) -> Self {
        Self {
            store,
            connect: Box::new(connect),
            alert,
        }
    }

    /// Run the selected mode, writing progress to `out`.
    ///
    /// # Errors
    ///
    /// Returns whatever the selected mode fails with.
    pub fn dispatch(
        &self,
        mode: Mode,
        ticker: &mut dyn Ticker,
        out: &mut dyn Write,
    ) -> Result<(), PomoError> {
        match mode {
            Mode::Initialize { token } => self.initialize(&token, out),
            Mode::Complete => self.complete(out),
            Mode::StartCountdown { minutes } => self.start_countdown(&minutes, ticker, out),
        }
    }

    /// Store the credential token. Leaves any countdown alone.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session file cannot be updated.
    pub fn initialize(&self, token: &str, out: &mut dyn Write) -> Result<(), PomoError> {
        self.store.merge(PartialSessionRecord::token(token))?;
        log::info!("credential token saved");

        writeln!(
            out,
            "{} config created at {}",
            "✓".green(),
            self.store.path().display()
        )?;
        Ok(())
    }

    /// End the session now, whether or not a countdown is running.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::NotConfigured` before doing anything if no token is
    /// stored, otherwise any error from the end sequence.
    pub fn complete(&self, out: &mut dyn Write) -> Result<(), PomoError> {
        let record = self.store.load()?;
        ensure_configured(&record)?;

        writeln!(out, "stopping")?;
        let signaler = (self.connect)(&record.credential_token);
        let mut engine = TimerEngine::new(self.store, signaler.as_ref(), self.alert);
        engine.end()?;

        writeln!(out, "{} you're free", "✓".green())?;
        Ok(())
    }

    /// Start a countdown of `minutes` and tick it down to the end.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Validation` for a bad `minutes` value and
    /// `PomoError::NotConfigured` if no token is stored, both before any side
    /// effect. Errors from the start sequence are returned as well; failures
    /// of individual ticks are logged and the countdown continues.
    pub fn start_countdown(
        &self,
        minutes: &str,
        ticker: &mut dyn Ticker,
        out: &mut dyn Write,
    ) -> Result<(), PomoError> {
        let minutes = parse_minutes(minutes)?;
        let record = self.store.load()?;
        ensure_configured(&record)?;

        writeln!(out, "starting new pomo timer")?;
        let signaler = (self.connect)(&record.credential_token);
        let mut engine = TimerEngine::new(self.store, signaler.as_ref(), self.alert);
        engine.start(minutes)?;

        engine.run(ticker, |outcome| {
            let line = match outcome {
                TickOutcome::Continued { remaining } => format!("timer: {remaining}"),
                TickOutcome::Ended => "timer: 0".to_string(),
            };
            if let Err(e) = writeln!(out, "{line}") {
                log::warn!("could not write progress: {e}");
            }
        });

        if engine.state() == TimerState::Ended {
            writeln!(out, "{} you're free", "✓".green())?;
        }
        Ok(())
    }
}
