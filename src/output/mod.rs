//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod messages;

pub use display::{print_replay_result, print_round, print_session_stats};
pub use messages::{Banner, farewell_text};
