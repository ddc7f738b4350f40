//! Command-line interface for pomo.

pub mod args;
pub mod commands;

pub use args::{Cli, Settings};
