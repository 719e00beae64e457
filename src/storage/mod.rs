//! Persistence seam
//!
//! The engine only talks to a [`Storage`]; the backing technology is up to the
//! implementor. [`MemoryStore`] is the bundled implementation.

mod memory;

pub use memory::MemoryStore;

use crate::core::{Game, GameId, Score, SecretWord, User, UserId};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Computes the new ranking of every ranked user from all users and scores
pub type RankFn<'a> = dyn FnMut(&[User], &[Score]) -> FxHashMap<UserId, u32> + 'a;

/// Failures reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("a user named {0} already exists")]
    DuplicateName(String),
    #[error("no stored user with id {0}")]
    MissingUser(UserId),
    #[error("no stored game with id {0}")]
    MissingGame(GameId),
    #[error("game {0} already has a score")]
    AlreadyScored(GameId),
    #[error("storage lock poisoned by a panicked writer")]
    Poisoned,
}

/// Record storage for users, games and scores
///
/// Listing methods return records in creation order.
pub trait Storage: Send + Sync {
    /// Create a user; names are unique
    ///
    /// # Errors
    /// `StorageError::DuplicateName` if the name is taken.
    fn create_user(&self, name: &str, email: Option<&str>) -> Result<User, StorageError>;

    fn user(&self, id: UserId) -> Result<Option<User>, StorageError>;

    fn user_by_name(&self, name: &str) -> Result<Option<User>, StorageError>;

    fn users(&self) -> Result<Vec<User>, StorageError>;

    /// Overwrite a stored user
    ///
    /// # Errors
    /// `StorageError::MissingUser` if the user was never created.
    fn update_user(&self, user: &User) -> Result<(), StorageError>;

    /// Recompute every user's ranking as one exclusive step
    ///
    /// `rank` sees the users and scores as they are at the moment of the
    /// write; no other ranking write or score insert can land in between.
    /// Users missing from the returned map have their ranking cleared.
    /// Returns how many users changed.
    fn rerank(&self, rank: &mut RankFn<'_>) -> Result<usize, StorageError>;

    /// Create an active game for `user`
    fn create_game(
        &self,
        user: UserId,
        word: SecretWord,
        attempts: u32,
    ) -> Result<Game, StorageError>;

    fn game(&self, id: GameId) -> Result<Option<Game>, StorageError>;

    fn games(&self) -> Result<Vec<Game>, StorageError>;

    fn games_for_user(&self, user: UserId) -> Result<Vec<Game>, StorageError>;

    /// Overwrite a stored game
    ///
    /// # Errors
    /// `StorageError::MissingGame` if the game was never created.
    fn update_game(&self, game: &Game) -> Result<(), StorageError>;

    /// Save a finished game together with its score
    ///
    /// Either both are stored or neither is.
    ///
    /// # Errors
    /// `StorageError::MissingGame` if the game was never created,
    /// `StorageError::AlreadyScored` if it already has a score.
    fn finish_game(&self, game: &Game, won: bool, guesses: u32) -> Result<Score, StorageError>;

    fn scores(&self) -> Result<Vec<Score>, StorageError>;

    fn scores_for_user(&self, user: UserId) -> Result<Vec<Score>, StorageError>;
}
