//! Secret word representation
//!
//! A Word stores the round's target along with its set of distinct letters,
//! which is all the engine needs to score a guess or decide a win.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The secret word for one round
///
/// Immutable once built: the text is lowercase ASCII letters and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{word}' must contain only ASCII letters")]
    NonAlphabetic { word: String },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty after trimming
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Word;
    ///
    /// let word = Word::new("Rust").unwrap();
    /// assert_eq!(word.text(), "rust");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c++").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic { word: text });
        }

        let distinct = text.bytes().filter_map(Letter::from_byte).collect();

        Ok(Self { text, distinct })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letters in position order, repeats included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().filter_map(Letter::from_byte)
    }

    /// The distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.distinct.iter().copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
