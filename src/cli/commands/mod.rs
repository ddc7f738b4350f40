//! Command implementations for pomo.
//!
//! One invocation runs exactly one [`Mode`].

mod session;

pub use session::{ensure_configured, parse_minutes, Connect, SessionController};

/// The operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Save the credential token and exit.
    Initialize { token: String },
    /// Run the end sequence now.
    Complete,
    /// Start a countdown; `minutes` is the raw argument.
    StartCountdown { minutes: String },
}
