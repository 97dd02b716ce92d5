//! Replay command
//!
//! Plays a fixed word against a scripted list of guesses, without a clock.

use crate::config::GameConfig;
use crate::core::{RoundStatus, Tile, Word};
use crate::round::{GuessError, GuessOutcome, Round, RoundError};
use crate::timer::TickQueue;

/// Configuration for a replay
pub struct ReplayConfig {
    pub word: String,
    /// Guesses in order; whitespace and commas are separators
    pub letters: String,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(word: String, letters: String) -> Self {
        Self {
            word,
            letters,
            game: GameConfig::default(),
        }
    }
}

/// One scripted guess and what it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub input: char,
    pub result: Result<GuessOutcome, GuessError>,
    pub wrong_guesses: usize,
    pub status: RoundStatus,
    /// Stage lost by this guess, when the round carries on
    pub farewell: Option<String>,
}

/// Result of replaying a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    pub word: String,
    pub steps: Vec<ReplayStep>,
    pub status: RoundStatus,
    pub board: Vec<Tile>,
    pub guesses_left: usize,
}

/// Replay the scripted guesses against the word
///
/// Rejected inputs (non-letters, guesses after the round ended) are recorded
/// as steps rather than aborting the replay.
///
/// # Errors
///
/// Returns `RoundError` if the word is empty or not alphabetic, or the
/// penalty track is unplayable.
pub fn replay_guesses(config: ReplayConfig) -> Result<ReplayResult, RoundError> {
    let word = Word::new(config.word.as_str())?;
    let mut round = Round::with_word(word, &config.game, TickQueue::new())?;
    round.start();

    let steps = config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|input| {
            let result = round.guess(input);
            ReplayStep {
                input,
                result,
                wrong_guesses: round.engine().wrong_guess_count(),
                status: round.status(),
                farewell: round.farewell().map(|label| label.name.clone()),
            }
        })
        .collect();

    Ok(ReplayResult {
        word: round.engine().word().text().to_string(),
        steps,
        status: round.status(),
        board: round.board(),
        guesses_left: round.engine().guesses_left(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn replay(word: &str, letters: &str) -> ReplayResult {
        replay_guesses(ReplayConfig::new(word.to_string(), letters.to_string())).unwrap()
    }

    #[test]
    fn replay_winning_sequence() {
        let result = replay("rust", "a r u s t");

        assert_eq!(result.status, RoundStatus::Won);
        assert_eq!(result.steps.len(), 5);
        assert_eq!(
            result.steps[0].result,
            Ok(GuessOutcome::Incorrect(Letter::new('a').unwrap()))
        );
        assert_eq!(result.steps[0].wrong_guesses, 1);
        assert_eq!(result.steps[0].farewell.as_deref(), Some("HTML"));
        assert_eq!(result.steps[4].status, RoundStatus::Won);
        assert_eq!(result.guesses_left, 7);
    }

    #[test]
    fn replay_records_rejections() {
        let result = replay("go", "g,o,x,7");

        assert_eq!(result.status, RoundStatus::Won);
        assert_eq!(
            result.steps[2].result,
            Err(GuessError::RoundOver(RoundStatus::Won))
        );
        assert_eq!(result.steps[3].result, Err(GuessError::NotALetter('7')));
    }

    #[test]
    fn replay_losing_sequence_uncovers_word() {
        let result = replay("go", "abcdefhi");
        assert_eq!(result.status, RoundStatus::Lost);
        assert_eq!(result.steps[7].farewell, None);
        assert!(result.board.iter().all(|t| matches!(t, Tile::Missed(_))));
    }

    #[test]
    fn replay_invalid_word() {
        let result = replay_guesses(ReplayConfig::new("c++".to_string(), "c".to_string()));
        assert!(matches!(result, Err(RoundError::InvalidWord(_))));
    }
}
