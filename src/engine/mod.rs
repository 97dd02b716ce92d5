//! Game engine
//!
//! Pure, synchronous state for one secret word plus the penalty track that
//! gives wrong guesses their names.

mod game;
pub mod penalty;

pub use game::GameEngine;
pub use penalty::{LANGUAGES, PenaltyLabel, PenaltyTrack};
