//! Hangman game state machine
//!
//! A `Game` starts `Active` and moves to exactly one of `Won`, `Lost` or
//! `Cancelled`. Only `Active` games accept guesses or cancellation; every other
//! request is answered with a [`Move`] describing why nothing happened.

use super::{GameId, Letter, LetterError, SecretWord, UserId};
use rustc_hash::FxHashSet;
use std::fmt;

/// Attempts a new game starts with unless configured otherwise
pub const DEFAULT_ATTEMPTS: u32 = 6;

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
    Cancelled,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Win/loss result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Result of applying one raw guess to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The game was already won or lost
    AlreadyOver,
    /// The game was cancelled
    Cancelled,
    /// The input was not a single letter
    Invalid(LetterError),
    /// Letter was guessed before and is in the word
    RepeatCorrect(Letter),
    /// Letter was guessed before and is not in the word
    RepeatWrong(Letter),
    /// Letter occurs `count` times; the word is not complete yet
    Hit { letter: Letter, count: usize },
    /// Letter completed the word
    Won(Letter),
    /// Letter is not in the word; attempts remain
    Miss(Letter),
    /// Letter is not in the word and no attempts remain
    Lost(Letter),
}

impl Move {
    /// Whether the game was modified and must be saved
    #[must_use]
    pub const fn changed_state(self) -> bool {
        matches!(
            self,
            Self::Hit { .. } | Self::Won(_) | Self::Miss(_) | Self::Lost(_)
        )
    }

    /// Whether this move ended the game
    #[must_use]
    pub const fn finished_game(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOver => write!(f, "Game already over!"),
            Self::Cancelled => write!(f, "This game was cancelled!"),
            Self::Invalid(reason) => write!(f, "{reason}"),
            Self::RepeatCorrect(l) => {
                write!(f, "You've already guessed {l}, which is a correct letter.")
            }
            Self::RepeatWrong(l) => {
                write!(f, "You've already guessed {l}, which is an incorrect letter.")
            }
            Self::Hit { letter, count: 1 } => write!(f, "You guessed correct. There is 1 {letter}"),
            Self::Hit { letter, count } => {
                write!(f, "You guessed correct. There are {count} {letter}'s")
            }
            Self::Won(_) => write!(f, "You win!"),
            Self::Miss(l) => write!(f, "Wrong! There are no {l}'s in this word."),
            Self::Lost(l) => write!(f, "Wrong! There are no {l}'s in this word. Game over!"),
        }
    }
}

/// Result of a cancellation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancellation {
    Cancelled,
    AlreadyCancelled,
    AlreadyOver,
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Game has been cancelled!"),
            Self::AlreadyCancelled => write!(f, "This game was already cancelled!"),
            Self::AlreadyOver => write!(f, "The game is already over, and cannot be cancelled"),
        }
    }
}

/// One Hangman game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub user: UserId,
    word: SecretWord,
    attempts_remaining: u32,
    correct: FxHashSet<Letter>,
    wrong: FxHashSet<Letter>,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(id: GameId, user: UserId, word: SecretWord, attempts: u32) -> Self {
        Self {
            id,
            user,
            word,
            attempts_remaining: attempts,
            correct: FxHashSet::default(),
            wrong: FxHashSet::default(),
            status: GameStatus::Active,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Won or lost. Cancelled games are not over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.status, GameStatus::Cancelled)
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Won => Some(Outcome::Win),
            GameStatus::Lost => Some(Outcome::Loss),
            GameStatus::Active | GameStatus::Cancelled => None,
        }
    }

    #[must_use]
    pub const fn correct_letters(&self) -> &FxHashSet<Letter> {
        &self.correct
    }

    #[must_use]
    pub const fn wrong_letters(&self) -> &FxHashSet<Letter> {
        &self.wrong
    }

    /// Total distinct guesses made, correct and wrong
    #[must_use]
    pub fn guesses_made(&self) -> u32 {
        (self.correct.len() + self.wrong.len()) as u32
    }

    /// The word with unguessed letters masked
    #[must_use]
    pub fn obscured_word(&self) -> String {
        self.word.masked(&self.correct)
    }

    /// Apply one raw guess
    ///
    /// Checks run in a fixed order: finished game, cancelled game, malformed
    /// input, repeated letter. Only a fresh letter on an active game changes
    /// state.
    pub fn apply_guess(&mut self, raw: &str) -> Move {
        if self.is_over() {
            return Move::AlreadyOver;
        }
        if self.is_cancelled() {
            return Move::Cancelled;
        }

        let letter = match Letter::parse(raw) {
            Ok(letter) => letter,
            Err(reason) => return Move::Invalid(reason),
        };

        if self.correct.contains(&letter) {
            return Move::RepeatCorrect(letter);
        }
        if self.wrong.contains(&letter) {
            return Move::RepeatWrong(letter);
        }

        let count = self.word.occurrences(letter);
        if count > 0 {
            self.correct.insert(letter);
            if self.word.is_revealed_by(&self.correct) {
                self.status = GameStatus::Won;
                return Move::Won(letter);
            }
            return Move::Hit { letter, count };
        }

        self.wrong.insert(letter);
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining < 1 {
            self.status = GameStatus::Lost;
            return Move::Lost(letter);
        }
        Move::Miss(letter)
    }

    /// Cancel an active game
    pub fn cancel(&mut self) -> Cancellation {
        match self.status {
            GameStatus::Won | GameStatus::Lost => Cancellation::AlreadyOver,
            GameStatus::Cancelled => Cancellation::AlreadyCancelled,
            GameStatus::Active => {
                self.status = GameStatus::Cancelled;
                Cancellation::Cancelled
            }
        }
    }
}
