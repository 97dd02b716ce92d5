//! Guess bookkeeping for one secret word

use crate::core::{GuessSet, Letter, LetterState, RoundStatus, Tile, Word};
use tracing::{debug, trace};

/// Owns the secret word and the guessed letters; every outcome is derived
///
/// The engine never refuses a guess. Once the round is over it is up to the
/// caller to stop feeding it letters.
#[derive(Debug, Clone)]
pub struct GameEngine {
    word: Word,
    guesses: GuessSet,
    max_wrong_guesses: usize,
}

impl GameEngine {
    /// Create an engine for `word` that is lost after `max_wrong_guesses` misses
    #[must_use]
    pub fn new(word: Word, max_wrong_guesses: usize) -> Self {
        Self {
            word,
            guesses: GuessSet::new(),
            max_wrong_guesses,
        }
    }

    /// Record a guess
    ///
    /// Repeating a letter changes nothing, including the penalty count.
    pub fn submit_guess(&mut self, letter: Letter) {
        if self.guesses.insert(letter) {
            debug!(
                letter = %letter,
                hit = self.word.has_letter(letter),
                wrong = self.wrong_guess_count(),
                "guess recorded"
            );
        } else {
            trace!(letter = %letter, "repeated guess ignored");
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guesses.contains(letter)
    }

    /// Every distinct letter of the word has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word
            .distinct_letters()
            .all(|letter| self.guesses.contains(letter))
    }

    /// Guessed letters that do not occur in the word
    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guesses
            .iter()
            .filter(|&letter| !self.word.has_letter(letter))
            .count()
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.wrong_guess_count() >= self.max_wrong_guesses
    }

    /// Misses still allowed before the round is lost
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guess_count())
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.guesses.last()
    }

    #[must_use]
    pub fn is_last_guess_incorrect(&self) -> bool {
        self.last_guess()
            .is_some_and(|letter| !self.word.has_letter(letter))
    }

    /// Engine-only status; never `TimedOut`
    ///
    /// A word whose letters are all guessed is won even if the same guess
    /// also exhausted the penalty budget, so the two can never both hold.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Keyboard colouring for a letter
    #[must_use]
    pub fn letter_state(&self, letter: Letter) -> LetterState {
        if !self.guesses.contains(letter) {
            LetterState::Unguessed
        } else if self.word.has_letter(letter) {
            LetterState::Correct
        } else {
            LetterState::Wrong
        }
    }

    /// The word as the board shows it
    ///
    /// With `uncover_missed` set, unguessed letters come back as `Tile::Missed`
    /// instead of `Tile::Hidden`.
    #[must_use]
    pub fn tiles(&self, uncover_missed: bool) -> Vec<Tile> {
        self.word
            .letters()
            .map(|letter| {
                if self.guesses.contains(letter) {
                    Tile::Revealed(letter)
                } else if uncover_missed {
                    Tile::Missed(letter)
                } else {
                    Tile::Hidden
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(word: &str, max_wrong: usize) -> GameEngine {
        GameEngine::new(Word::new(word).unwrap(), max_wrong)
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn guess_all(engine: &mut GameEngine, letters: &str) {
        for c in letters.chars() {
            engine.submit_guess(letter(c));
        }
    }

    #[test]
    fn scenario_rust_is_won_after_all_letters() {
        let mut game = engine("rust", 8);

        game.submit_guess(letter('a'));
        assert_eq!(game.wrong_guess_count(), 1);
        assert!(game.is_last_guess_incorrect());
        assert_eq!(game.status(), RoundStatus::InProgress);

        guess_all(&mut game, "rus");
        assert!(!game.is_won());
        assert!(!game.is_last_guess_incorrect());

        game.submit_guess(letter('t'));
        let order: String = game.guesses().iter().map(Letter::as_char).collect();
        assert_eq!(order, "arust");
        assert!(game.is_won());
        assert_eq!(game.status(), RoundStatus::Won);
        assert_eq!(game.wrong_guess_count(), 1);
    }

    #[test]
    fn scenario_go_is_lost_on_first_miss() {
        let mut game = engine("go", 1);
        game.submit_guess(letter('x'));
        assert_eq!(game.wrong_guess_count(), 1);
        assert!(game.is_lost());
        assert_eq!(game.status(), RoundStatus::Lost);
    }

    #[test]
    fn repeated_guess_has_no_extra_penalty() {
        let mut game = engine("rust", 8);
        game.submit_guess(letter('z'));
        game.submit_guess(letter('z'));
        game.submit_guess(letter('Z'));
        assert_eq!(game.wrong_guess_count(), 1);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn repeated_letters_in_word_need_one_guess() {
        let mut game = engine("balloon", 8);
        guess_all(&mut game, "balon");
        assert!(game.is_won());
    }

    #[test]
    fn uppercase_guesses_match() {
        let mut game = engine("go", 8);
        game.submit_guess(letter('G'));
        game.submit_guess(letter('O'));
        assert!(game.is_won());
    }

    #[test]
    fn last_guess_tracking() {
        let mut game = engine("cat", 8);
        assert_eq!(game.last_guess(), None);
        assert!(!game.is_last_guess_incorrect());

        game.submit_guess(letter('c'));
        assert_eq!(game.last_guess(), Some(letter('c')));
        assert!(!game.is_last_guess_incorrect());

        game.submit_guess(letter('q'));
        assert_eq!(game.last_guess(), Some(letter('q')));
        assert!(game.is_last_guess_incorrect());
    }

    #[test]
    fn guesses_left_counts_down_and_saturates() {
        let mut game = engine("go", 2);
        assert_eq!(game.guesses_left(), 2);
        game.submit_guess(letter('x'));
        assert_eq!(game.guesses_left(), 1);
        guess_all(&mut game, "yz");
        assert_eq!(game.guesses_left(), 0);
        assert_eq!(game.wrong_guess_count(), 3);
    }

    #[test]
    fn engine_accepts_guesses_after_game_over() {
        let mut game = engine("go", 1);
        game.submit_guess(letter('x'));
        assert!(game.is_lost());

        game.submit_guess(letter('y'));
        assert_eq!(game.wrong_guess_count(), 2);
    }

    #[test]
    fn win_takes_precedence_when_both_hold() {
        // Budget of zero misses: "lost" from the start, yet a full word is a win
        let mut game = engine("a", 0);
        game.submit_guess(letter('a'));
        assert!(game.is_won());
        assert!(game.is_lost());
        assert_eq!(game.status(), RoundStatus::Won);
    }

    #[test]
    fn letter_states() {
        let mut game = engine("cat", 8);
        guess_all(&mut game, "cz");
        assert_eq!(game.letter_state(letter('c')), LetterState::Correct);
        assert_eq!(game.letter_state(letter('z')), LetterState::Wrong);
        assert_eq!(game.letter_state(letter('a')), LetterState::Unguessed);
    }

    #[test]
    fn tiles_reveal_every_occurrence() {
        let mut game = engine("noon", 8);
        game.submit_guess(letter('o'));
        let n = letter('n');
        let o = letter('o');

        assert_eq!(
            game.tiles(false),
            vec![Tile::Hidden, Tile::Revealed(o), Tile::Revealed(o), Tile::Hidden]
        );
        assert_eq!(
            game.tiles(true),
            vec![
                Tile::Missed(n),
                Tile::Revealed(o),
                Tile::Revealed(o),
                Tile::Missed(n)
            ]
        );
    }
}
