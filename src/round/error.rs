//! Errors raised by the round orchestrator

use crate::core::{RoundStatus, WordError};
use thiserror::Error;

/// Why a guess was not forwarded to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("the round has not started yet")]
    NotStarted,
    #[error("the round is already over ({0})")]
    RoundOver(RoundStatus),
}

/// Why a round could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("word provider returned an invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("word provider has no words")]
    NoWordAvailable,
    #[error("penalty track needs at least two stages, got {stages}")]
    PenaltyTrackTooShort { stages: usize },
}
