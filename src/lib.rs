//! Assembly: Endgame
//!
//! A hangman round against a countdown: every wrong guess costs a
//! programming language, and running out of languages or time loses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use assembly_endgame::config::GameConfig;
//! use assembly_endgame::core::{RoundStatus, Word};
//! use assembly_endgame::round::Round;
//! use assembly_endgame::timer::TickQueue;
//!
//! let word = Word::new("rust").unwrap();
//! let mut round = Round::with_word(word, &GameConfig::default(), TickQueue::new()).unwrap();
//! round.start();
//!
//! for c in "rust".chars() {
//!     round.guess(c).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Guess bookkeeping and penalty stages
pub mod engine;

// Countdown clock and tick scheduling
pub mod timer;

// Rounds and sessions tying engine and clock together
pub mod round;

// Game settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
