//! Word lists and word selection
//!
//! Provides the embedded secret word list and the [`WordSource`] seam through
//! which games pick their word.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Supplies secret words by length
pub trait WordSource: Send + Sync {
    /// Pick a word of exactly `length` letters, or `None` if there is none
    fn word_of_length(&self, length: usize) -> Option<SecretWord>;
}

/// Secret words grouped by length, picked at random
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    by_length: FxHashMap<usize, Vec<SecretWord>>,
}

impl WordBank {
    #[must_use]
    pub fn new(words: Vec<SecretWord>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<SecretWord>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        Self { by_length }
    }

    /// Word bank over the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Number of words per length, shortest first
    #[must_use]
    pub fn length_counts(&self) -> Vec<(usize, usize)> {
        let mut counts: Vec<(usize, usize)> = self
            .by_length
            .iter()
            .map(|(&length, words)| (length, words.len()))
            .collect();
        counts.sort_unstable();
        counts
    }
}

impl WordSource for WordBank {
    fn word_of_length(&self, length: usize) -> Option<SecretWord> {
        self.by_length
            .get(&length)
            .and_then(|words| words.choose(&mut rand::rng()))
            .cloned()
    }
}

/// Always answers with the same word, when the length matches
#[cfg(test)]
pub(crate) struct FixedWord(pub SecretWord);

#[cfg(test)]
impl FixedWord {
    pub(crate) fn new(text: &str) -> Self {
        Self(SecretWord::new(text).unwrap())
    }
}

#[cfg(test)]
impl WordSource for FixedWord {
    fn word_of_length(&self, length: usize) -> Option<SecretWord> {
        (self.0.len() == length).then(|| self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTHS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_secret_words() {
        for &word in WORDS {
            assert!(
                SecretWord::new(word).is_ok(),
                "Word '{word}' is not a valid secret word"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_bank_covers_every_length() {
        let bank = WordBank::embedded();
        for length in WORD_LENGTHS {
            let word = bank.word_of_length(length);
            assert!(word.is_some(), "no embedded word of length {length}");
            assert_eq!(word.unwrap().len(), length);
        }
    }

    #[test]
    fn bank_returns_none_for_missing_length() {
        let bank = WordBank::new(loader::words_from_slice(&["helloworld"]));
        assert!(bank.word_of_length(11).is_none());
        assert_eq!(bank.word_of_length(10).unwrap().text(), "HELLOWORLD");
    }

    #[test]
    fn length_counts_sorted() {
        let bank = WordBank::new(loader::words_from_slice(&[
            "basketball",
            "helloworld",
            "accommodate",
        ]));
        assert_eq!(bank.length_counts(), vec![(10, 2), (11, 1)]);
        assert_eq!(bank.len(), 3);
        assert!(!bank.is_empty());
        assert!(WordBank::default().is_empty());
    }

    #[test]
    fn fixed_word_checks_length() {
        let source = FixedWord::new("helloworld");
        assert!(source.word_of_length(10).is_some());
        assert!(source.word_of_length(12).is_none());
    }
}
