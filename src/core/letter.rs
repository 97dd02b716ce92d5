//! A single guessable letter
//!
//! Letters are stored lowercase so every comparison in the game is
//! case-insensitive by construction.

use std::fmt;

/// One ASCII letter, always lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing case
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q'), Letter::new('q'));
    /// assert!(Letter::new('7').is_none());
    /// ```
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Create a letter from a raw byte, normalizing case
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Get the lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (a = 0, z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'a'
    }

    /// Iterate over `a..=z` in order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('A').unwrap().as_char(), 'a');
        assert_eq!(Letter::new('z').unwrap().as_char(), 'z');
        assert_eq!(Letter::from_byte(b'M'), Letter::new('m'));
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert!(Letter::new('1').is_none());
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('-').is_none());
        assert!(Letter::new('é').is_none());
        assert!(Letter::from_byte(b'_').is_none());
    }

    #[test]
    fn letter_index() {
        assert_eq!(Letter::new('a').unwrap().index(), 0);
        assert_eq!(Letter::new('Z').unwrap().index(), 25);
    }

    #[test]
    fn alphabet_is_complete_and_ordered() {
        let letters: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::new('R').unwrap()), "r");
    }
}
