//! Core domain types for the game
//!
//! Pure value types: letters, the secret word, the guess set and the derived
//! statuses. Nothing in here knows about time.

mod guesses;
mod letter;
mod status;
mod word;

pub use guesses::GuessSet;
pub use letter::Letter;
pub use status::{LetterState, RoundStatus, Tile};
pub use word::{Word, WordError};
