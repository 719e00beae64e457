//! Single-letter guesses
//!
//! A `Letter` is one uppercase ASCII letter. Raw player input is normalized and
//! validated here before it reaches a game.

use std::fmt;
use thiserror::Error;

/// One uppercase letter, A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Why a raw guess is not a letter
///
/// The display text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Invalid guess! You can only guess one letter at a time!")]
    NotSingle,
    #[error("You need to enter a letter (A-Z)!")]
    NotALetter,
}

impl Letter {
    /// Parse a raw guess
    ///
    /// The input is uppercased first; it must then be exactly one character,
    /// and that character must be A-Z.
    ///
    /// # Errors
    /// `LetterError::NotSingle` when the normalized input is not one character,
    /// `LetterError::NotALetter` when that character is outside A-Z.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, LetterError};
    ///
    /// assert_eq!(Letter::parse("e").unwrap().as_char(), 'E');
    /// assert_eq!(Letter::parse("ab"), Err(LetterError::NotSingle));
    /// assert_eq!(Letter::parse("7"), Err(LetterError::NotALetter));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LetterError> {
        let upper = raw.to_uppercase();
        let mut chars = upper.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => Ok(Self(c as u8)),
            (Some(_), None) => Err(LetterError::NotALetter),
            _ => Err(LetterError::NotSingle),
        }
    }

    /// Build a letter from an ASCII byte, accepting either case
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
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
    fn parse_normalizes_case() {
        assert_eq!(Letter::parse("a").unwrap(), Letter::parse("A").unwrap());
        assert_eq!(Letter::parse("z").unwrap().as_char(), 'Z');
    }

    #[test]
    fn parse_rejects_multiple_characters() {
        assert_eq!(Letter::parse("ab"), Err(LetterError::NotSingle));
        assert_eq!(Letter::parse(""), Err(LetterError::NotSingle));
        assert_eq!(Letter::parse(" a"), Err(LetterError::NotSingle));
        // Uppercases to "SS"
        assert_eq!(Letter::parse("ß"), Err(LetterError::NotSingle));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(Letter::parse("1"), Err(LetterError::NotALetter));
        assert_eq!(Letter::parse("?"), Err(LetterError::NotALetter));
        assert_eq!(Letter::parse(" "), Err(LetterError::NotALetter));
        assert_eq!(Letter::parse("é"), Err(LetterError::NotALetter));
    }

    #[test]
    fn from_byte_accepts_both_cases() {
        assert_eq!(Letter::from_byte(b'q'), Letter::from_byte(b'Q'));
        assert!(Letter::from_byte(b'-').is_none());
    }

    #[test]
    fn alphabet_has_26_letters_in_order() {
        let letters: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn error_messages_match_player_text() {
        assert_eq!(
            LetterError::NotSingle.to_string(),
            "Invalid guess! You can only guess one letter at a time!"
        );
        assert_eq!(
            LetterError::NotALetter.to_string(),
            "You need to enter a letter (A-Z)!"
        );
    }
}
