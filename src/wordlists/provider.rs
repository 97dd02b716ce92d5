//! Secret word providers

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Supplies the secret word for each new round
///
/// Implemented for any `FnMut() -> Option<String>`, so a closure is enough
/// for fixed or scripted words. The round validates whatever comes back.
pub trait WordProvider {
    /// The next word, or `None` when the provider is exhausted
    fn next_word(&mut self) -> Option<String>;
}

impl<F> WordProvider for F
where
    F: FnMut() -> Option<String>,
{
    fn next_word(&mut self) -> Option<String> {
        self()
    }
}

/// Uniformly random picks from a word list
#[derive(Debug, Clone)]
pub struct RandomWords<R: Rng = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl RandomWords<StdRng> {
    /// Random picks seeded from the operating system
    #[must_use]
    pub fn from_os_rng(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Reproducible picks for a given seed
    #[must_use]
    pub fn from_seed(words: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    /// Picks from the embedded list, optionally seeded
    #[must_use]
    pub fn embedded(seed: Option<u64>) -> Self {
        let words = words_from_slice(WORDS);
        match seed {
            Some(seed) => Self::from_seed(words, seed),
            None => Self::from_os_rng(words),
        }
    }
}

impl<R: Rng> RandomWords<R> {
    #[must_use]
    pub const fn with_rng(words: Vec<Word>, rng: R) -> Self {
        Self { words, rng }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordProvider for RandomWords<R> {
    fn next_word(&mut self) -> Option<String> {
        self.words
            .choose(&mut self.rng)
            .map(|word| word.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_provider() {
        let mut queue = vec!["dog", "cat"].into_iter();
        let mut provider = move || queue.next().map(String::from);

        assert_eq!(provider.next_word().as_deref(), Some("dog"));
        assert_eq!(provider.next_word().as_deref(), Some("cat"));
        assert_eq!(provider.next_word(), None);
    }

    #[test]
    fn random_words_pick_from_list() {
        let words = words_from_slice(&["alpha", "beta", "gamma"]);
        let mut provider = RandomWords::from_seed(words, 7);

        for _ in 0..20 {
            let word = provider.next_word().unwrap();
            assert!(["alpha", "beta", "gamma"].contains(&word.as_str()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomWords::embedded(Some(42));
        let mut b = RandomWords::embedded(Some(42));
        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut provider = RandomWords::from_seed(Vec::new(), 1);
        assert!(provider.is_empty());
        assert_eq!(provider.next_word(), None);
    }

    #[test]
    fn embedded_provider_uses_all_words() {
        let provider = RandomWords::embedded(Some(0));
        assert_eq!(provider.len(), WORDS.len());
        assert_eq!(provider.words()[0].text(), WORDS[0]);
    }
}
