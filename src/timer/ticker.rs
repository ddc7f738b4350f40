//! Tick sources for the countdown.

use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Default time between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Something that blocks until the next tick.
pub trait Ticker {
    /// Wait for the next tick. Returns `false` once the source is exhausted.
    fn wait(&mut self) -> bool;
}

/// Fixed wall-clock interval. Time spent handling a tick is not subtracted,
/// so long countdowns drift slightly.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTicker {
    period: Duration,
}

impl IntervalTicker {
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) -> bool {
        std::thread::sleep(self.period);
        true
    }
}

/// Ticks fed through a channel; closed when every sender is dropped.
impl Ticker for Receiver<()> {
    fn wait(&mut self) -> bool {
        self.recv().is_ok()
    }
}
