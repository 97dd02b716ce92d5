//! Word supply for new rounds
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the random provider rounds draw their secret word from.

mod embedded;
pub mod loader;
pub mod provider;

pub use embedded::{WORDS, WORDS_COUNT};
pub use provider::{RandomWords, WordProvider};
