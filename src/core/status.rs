//! Derived round and letter states

use super::Letter;
use std::fmt;

/// Outcome of a round, recomputed on every query
///
/// The engine alone only ever produces `InProgress`, `Won` or `Lost`;
/// `TimedOut` is layered on by the round orchestrator when the countdown
/// expires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
    TimedOut,
}

impl RoundStatus {
    /// True for `Won`, `Lost` and `TimedOut`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::TimedOut => "timed out",
        };
        f.write_str(text)
    }
}

/// How a keyboard letter should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unguessed,
    Correct,
    Wrong,
}

/// One position of the secret word as the board shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Guessed, shown normally
    Revealed(Letter),
    /// Not guessed yet
    Hidden,
    /// Never guessed, uncovered after a loss
    Missed(Letter),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!RoundStatus::InProgress.is_terminal());
        assert!(RoundStatus::Won.is_terminal());
        assert!(RoundStatus::Lost.is_terminal());
        assert!(RoundStatus::TimedOut.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(RoundStatus::TimedOut.to_string(), "timed out");
        assert_eq!(RoundStatus::InProgress.to_string(), "in progress");
    }
}
