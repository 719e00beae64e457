//! Core domain types for Hangman
//!
//! Words, letters, the per-game state machine and the stored records. Nothing
//! here touches storage or I/O, so every rule is testable in isolation.

mod game;
mod letter;
mod records;
mod word;

pub use game::{Cancellation, DEFAULT_ATTEMPTS, Game, GameStatus, Move, Outcome};
pub use letter::{Letter, LetterError};
pub use records::{GameId, Score, ScoreId, User, UserId};
pub use word::{MASK, SecretWord, WORD_LENGTHS, WordError};
