//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_guesses};
pub use simple::run_simple;
