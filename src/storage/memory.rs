//! In-process record store

use super::{RankFn, Storage, StorageError};
use crate::core::{Game, GameId, Score, ScoreId, SecretWord, User, UserId};
use rustc_hash::FxHashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    names: FxHashMap<String, UserId>,
    games: Vec<Game>,
    scores: Vec<Score>,
}

/// Thread-safe store keeping every record in memory
///
/// Ids are 1-based positions in creation order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables.write().map_err(|_| StorageError::Poisoned)
    }
}

const fn slot(id: u64) -> usize {
    (id as usize).wrapping_sub(1)
}

impl Storage for MemoryStore {
    fn create_user(&self, name: &str, email: Option<&str>) -> Result<User, StorageError> {
        let mut tables = self.write()?;
        if tables.names.contains_key(name) {
            return Err(StorageError::DuplicateName(name.to_string()));
        }

        let id = UserId(tables.users.len() as u64 + 1);
        let user = User::new(id, name.to_string(), email.map(str::to_string));
        tables.names.insert(user.name.clone(), id);
        tables.users.push(user.clone());
        Ok(user)
    }

    fn user(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self.read()?.users.get(slot(id.0)).cloned())
    }

    fn user_by_name(&self, name: &str) -> Result<Option<User>, StorageError> {
        let tables = self.read()?;
        Ok(tables
            .names
            .get(name)
            .and_then(|id| tables.users.get(slot(id.0)))
            .cloned())
    }

    fn users(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.read()?.users.clone())
    }

    fn update_user(&self, user: &User) -> Result<(), StorageError> {
        let mut tables = self.write()?;
        let stored = tables
            .users
            .get_mut(slot(user.id.0))
            .ok_or(StorageError::MissingUser(user.id))?;
        *stored = user.clone();
        Ok(())
    }

    fn rerank(&self, rank: &mut RankFn<'_>) -> Result<usize, StorageError> {
        let mut tables = self.write()?;
        let Tables { users, scores, .. } = &mut *tables;
        let ranks = rank(users, scores);

        let mut changed = 0;
        for user in users.iter_mut() {
            let ranking = ranks.get(&user.id).copied();
            if user.ranking != ranking {
                user.ranking = ranking;
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn create_game(
        &self,
        user: UserId,
        word: SecretWord,
        attempts: u32,
    ) -> Result<Game, StorageError> {
        let mut tables = self.write()?;
        if tables.users.get(slot(user.0)).is_none() {
            return Err(StorageError::MissingUser(user));
        }

        let id = GameId(tables.games.len() as u64 + 1);
        let game = Game::new(id, user, word, attempts);
        tables.games.push(game.clone());
        Ok(game)
    }

    fn game(&self, id: GameId) -> Result<Option<Game>, StorageError> {
        Ok(self.read()?.games.get(slot(id.0)).cloned())
    }

    fn games(&self) -> Result<Vec<Game>, StorageError> {
        Ok(self.read()?.games.clone())
    }

    fn games_for_user(&self, user: UserId) -> Result<Vec<Game>, StorageError> {
        Ok(self
            .read()?
            .games
            .iter()
            .filter(|game| game.user == user)
            .cloned()
            .collect())
    }

    fn update_game(&self, game: &Game) -> Result<(), StorageError> {
        let mut tables = self.write()?;
        let stored = tables
            .games
            .get_mut(slot(game.id.0))
            .ok_or(StorageError::MissingGame(game.id))?;
        *stored = game.clone();
        Ok(())
    }

    fn finish_game(&self, game: &Game, won: bool, guesses: u32) -> Result<Score, StorageError> {
        let mut tables = self.write()?;
        if tables.scores.iter().any(|score| score.game == game.id) {
            return Err(StorageError::AlreadyScored(game.id));
        }
        let stored = tables
            .games
            .get_mut(slot(game.id.0))
            .ok_or(StorageError::MissingGame(game.id))?;
        *stored = game.clone();

        let score = Score {
            id: ScoreId(tables.scores.len() as u64 + 1),
            user: game.user,
            game: game.id,
            won,
            guesses,
        };
        tables.scores.push(score);
        Ok(score)
    }

    fn scores(&self) -> Result<Vec<Score>, StorageError> {
        Ok(self.read()?.scores.clone())
    }

    fn scores_for_user(&self, user: UserId) -> Result<Vec<Score>, StorageError> {
        Ok(self
            .read()?
            .scores
            .iter()
            .filter(|score| score.user == user)
            .copied()
            .collect())
    }
}
