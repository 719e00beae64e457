//! Hangman game engine
//!
//! Game sessions, ranking and the cached game statistics built on top of the
//! core state machine.

mod config;
pub mod ranking;
mod session;
mod stats;
mod view;

pub use config::GameConfig;
pub use ranking::{DEFAULT_HIGH_SCORES, RankingEngine, Standing, compute_rankings};
pub use session::{GAME_STARTED, GameSession};
pub use stats::{ActiveGamesCache, NO_ACTIVE_GAMES};
pub use view::{GameView, GuessReport};

use crate::core::GameId;
use crate::storage::StorageError;
use thiserror::Error;

/// Requests the engine refuses to carry out
///
/// Gameplay outcomes such as guessing on a finished game are not errors; they
/// come back as messages.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Word length must be between 10 and 20, got {0}")]
    InvalidWordLength(usize),
    #[error("No word of length {0} is available")]
    NoWordOfLength(usize),
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error("A user named {0} does not exist")]
    UserNotFound(String),
    #[error("A user named {0} already exists")]
    UserExists(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
