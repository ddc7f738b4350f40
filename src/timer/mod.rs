//! Countdown engine.
//!
//! Provides the timer state machine, its tick sources and the failure policy
//! applied to the calls it makes.

mod engine;
pub mod policy;
mod ticker;

pub use engine::{free_in, TickOutcome, TimerEngine, TimerState, FREE_EMOJI, FREE_STATUS, WORKING_EMOJI};
pub use policy::{CallKind, FailurePolicy, Phase};
pub use ticker::{IntervalTicker, Ticker, TICK_INTERVAL};
