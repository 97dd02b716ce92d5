//! Ordered set of guessed letters

use super::Letter;

/// Letters the player has submitted, in submission order
///
/// No letter appears twice. Membership is tracked in a 26-bit mask next to the
/// ordered list, so lookups never scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    order: Vec<Letter>,
    mask: u32,
}

impl GuessSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter unless it was already guessed
    ///
    /// Returns `true` if the set grew.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1u32 << letter.index()) != 0
    }

    /// The most recently appended letter
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Letter> {
        self.order.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in submission order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Letter] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }
}
