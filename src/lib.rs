//! pomo - a pomodoro timer that keeps Slack in sync
//!
//! Runs one countdown at a time. While it runs, your status, presence and
//! notification snooze on the presence service reflect it; the remaining time
//! is persisted to `~/.pomo-timer.json` after every minute.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod presence;
pub mod timer;

#[cfg(test)]
mod testing;

pub use cli::args::Cli;
pub use config::{SessionRecord, SessionStore};
pub use error::PomoError;
pub use timer::TimerEngine;
