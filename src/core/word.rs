//! Secret word representation
//!
//! A `SecretWord` stores an uppercase 10-20 letter word along with letter position
//! indices, so occurrence counts and masking never rescan the text.

use super::Letter;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed secret word lengths
pub const WORD_LENGTHS: RangeInclusive<usize> = 10..=20;

/// Placeholder shown for letters that have not been revealed
pub const MASK: char = '_';

/// A Hangman secret word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be between 10 and 20 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl SecretWord {
    /// Create a new secret word, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 10..=20
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("helloworld").unwrap();
    /// assert_eq!(word.text(), "HELLOWORLD");
    ///
    /// assert!(SecretWord::new("short").is_err());
    /// assert!(SecretWord::new("hello world").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !WORD_LENGTHS.contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, byte) in text.bytes().enumerate() {
            let letter = Letter::from_byte(byte).ok_or(WordError::InvalidCharacters)?;
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; secret words have at least 10 letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// How many times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.positions_of(letter).len()
    }

    /// True when every distinct letter of the word is in `revealed`
    #[must_use]
    pub fn is_revealed_by(&self, revealed: &FxHashSet<Letter>) -> bool {
        self.letter_positions
            .keys()
            .all(|letter| revealed.contains(letter))
    }

    /// The word with every letter outside `revealed` replaced by [`MASK`]
    #[must_use]
    pub fn masked(&self, revealed: &FxHashSet<Letter>) -> String {
        self.text
            .bytes()
            .map(|byte| match Letter::from_byte(byte) {
                Some(letter) if revealed.contains(&letter) => letter.as_char(),
                _ => MASK,
            })
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::parse(&c.to_string()).unwrap()
    }

    #[test]
    fn word_creation_uppercases() {
        let word = SecretWord::new("helloworld").unwrap();
        assert_eq!(word.text(), "HELLOWORLD");
        assert_eq!(word.len(), 10);

        let word2 = SecretWord::new("HeLlOwOrLd").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            SecretWord::new("crane"),
            Err(WordError::InvalidLength(5))
        ));
        assert!(matches!(
            SecretWord::new("a".repeat(21)),
            Err(WordError::InvalidLength(21))
        ));
        assert!(matches!(
            SecretWord::new(""),
            Err(WordError::InvalidLength(0))
        ));
    }

    #[test]
    fn word_creation_length_bounds_inclusive() {
        assert!(SecretWord::new("a".repeat(10)).is_ok());
        assert!(SecretWord::new("a".repeat(20)).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            SecretWord::new("hello world"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            SecretWord::new("helloworld1"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            SecretWord::new("héllowörld"),
            Err(WordError::NonAscii)
        ));
    }

    #[test]
    fn occurrences_counts_duplicates() {
        let word = SecretWord::new("helloworld").unwrap();
        assert_eq!(word.occurrences(letter('L')), 3);
        assert_eq!(word.occurrences(letter('O')), 2);
        assert_eq!(word.occurrences(letter('H')), 1);
        assert_eq!(word.occurrences(letter('Z')), 0);
        assert_eq!(word.positions_of(letter('L')), &[2, 3, 8]);
    }

    #[test]
    fn masked_reveals_only_guessed_letters() {
        let word = SecretWord::new("helloworld").unwrap();
        let mut revealed = FxHashSet::default();
        assert_eq!(word.masked(&revealed), "__________");

        revealed.insert(letter('L'));
        revealed.insert(letter('O'));
        assert_eq!(word.masked(&revealed), "__LLO_O_L_");
        assert!(!word.is_revealed_by(&revealed));
    }

    #[test]
    fn fully_revealed_word() {
        let word = SecretWord::new("helloworld").unwrap();
        let revealed: FxHashSet<Letter> = "HELOWRD".chars().map(letter).collect();
        assert!(word.is_revealed_by(&revealed));
        assert_eq!(word.masked(&revealed), "HELLOWORLD");
    }
}
