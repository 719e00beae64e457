//! Game session service
//!
//! `GameSession` ties the state machine to storage, word selection, ranking and
//! the active game cache. Rejected requests (bad length, unknown ids) are
//! `Err`; everything that happens during play, including guesses on finished
//! games, is an `Ok` carrying a message.

use super::{
    ActiveGamesCache, GameConfig, GameError, GameView, GuessReport, RankingEngine, Standing,
    ranking,
};
use crate::core::{Cancellation, Game, GameId, Outcome, Score, User, WORD_LENGTHS};
use crate::storage::{Storage, StorageError};
use crate::wordlists::WordSource;
use std::sync::Arc;

/// Message attached to a freshly created game
pub const GAME_STARTED: &str = "Hangman game started!";

/// Hangman service over one store
pub struct GameSession<S: ?Sized, W> {
    store: Arc<S>,
    words: W,
    config: GameConfig,
    active_games: ActiveGamesCache,
}

impl<S: Storage + ?Sized + 'static, W: WordSource> GameSession<S, W> {
    /// Create a session service with the given store and word source
    pub fn new(store: Arc<S>, words: W, config: GameConfig) -> Self {
        Self {
            store,
            words,
            config,
            active_games: ActiveGamesCache::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.store.as_ref()
    }

    /// Register a player
    ///
    /// # Errors
    /// `GameError::UserExists` if the name is taken.
    pub fn create_user(&self, name: &str, email: Option<&str>) -> Result<User, GameError> {
        let user = self
            .store
            .create_user(name, email)
            .map_err(|e| match e {
                StorageError::DuplicateName(name) => GameError::UserExists(name),
                other => GameError::Storage(other),
            })?;
        log::info!("Created user {} ({})", user.name, user.id);
        Ok(user)
    }

    /// Look up a player by name
    ///
    /// # Errors
    /// `GameError::UserNotFound` if no such user exists.
    pub fn find_user(&self, name: &str) -> Result<User, GameError> {
        self.store
            .user_by_name(name)?
            .ok_or_else(|| GameError::UserNotFound(name.to_string()))
    }

    /// Start a game for `user_name` with a secret word of `word_length` letters
    ///
    /// Schedules a background refresh of the active game count, which never
    /// delays or fails game creation.
    ///
    /// # Errors
    /// - `GameError::InvalidWordLength` outside 10..=20
    /// - `GameError::UserNotFound` for an unknown player
    /// - `GameError::NoWordOfLength` if the word source has nothing that long
    pub fn new_game(&self, user_name: &str, word_length: usize) -> Result<GameView, GameError> {
        if !WORD_LENGTHS.contains(&word_length) {
            return Err(GameError::InvalidWordLength(word_length));
        }
        let user = self.find_user(user_name)?;
        let word = self
            .words
            .word_of_length(word_length)
            .ok_or(GameError::NoWordOfLength(word_length))?;

        let game = self
            .store
            .create_game(user.id, word, self.config.starting_attempts)?;
        log::info!(
            "Game {} started for {} with a {word_length}-letter word",
            game.id,
            user.name
        );

        self.active_games
            .refresh_in_background(Arc::clone(&self.store));

        Ok(GameView::new(&game, GAME_STARTED))
    }

    /// Current state of a game with a status message
    ///
    /// # Errors
    /// `GameError::GameNotFound` for an unknown id.
    pub fn get_game(&self, game_id: GameId) -> Result<GameView, GameError> {
        let game = self.load_game(game_id)?;
        let message = if game.is_over() {
            "The game is already over!"
        } else if game.is_cancelled() {
            "This game was cancelled!"
        } else {
            "Time to make a move!"
        };
        Ok(GameView::new(&game, message))
    }

    /// Apply one raw guess to a game
    ///
    /// On the guess that wins or loses the game, the final state and its score
    /// are stored together and every user's ranking is recomputed. A failed
    /// recompute is logged; the guess still stands and is reported.
    ///
    /// # Errors
    /// `GameError::GameNotFound` for an unknown id, or a storage failure while
    /// saving the guess, in which case nothing was saved.
    /// Finished, cancelled, malformed and repeated guesses are not errors.
    pub fn apply_guess(&self, game_id: GameId, raw: &str) -> Result<GuessReport, GameError> {
        let mut game = self.load_game(game_id)?;
        let result = game.apply_guess(raw);
        log::debug!("Game {game_id}: guess {raw:?} -> {result:?}");

        let score = if result.finished_game() {
            Some(self.finish(&game)?)
        } else if result.changed_state() {
            self.store.update_game(&game)?;
            None
        } else {
            None
        };

        Ok(GuessReport {
            view: GameView::new(&game, result.to_string()),
            result,
            score,
        })
    }

    /// Cancel an active game; finished games are left untouched
    ///
    /// # Errors
    /// `GameError::GameNotFound` for an unknown id, or a storage failure.
    pub fn cancel_game(&self, game_id: GameId) -> Result<GameView, GameError> {
        let mut game = self.load_game(game_id)?;
        let cancellation = game.cancel();
        if cancellation == Cancellation::Cancelled {
            self.store.update_game(&game)?;
            log::info!("Game {game_id} cancelled");
        }
        Ok(GameView::new(&game, cancellation.to_string()))
    }

    /// Every game of one player, active and finished
    ///
    /// # Errors
    /// `GameError::UserNotFound` for an unknown player.
    pub fn user_games(&self, user_name: &str) -> Result<Vec<GameView>, GameError> {
        let user = self.find_user(user_name)?;
        Ok(self
            .store
            .games_for_user(user.id)?
            .iter()
            .map(|game| GameView::new(game, String::new()))
            .collect())
    }

    /// Every score in creation order
    ///
    /// # Errors
    /// Storage failures.
    pub fn all_scores(&self) -> Result<Vec<Score>, GameError> {
        Ok(self.store.scores()?)
    }

    /// One player's scores
    ///
    /// # Errors
    /// `GameError::UserNotFound` for an unknown player.
    pub fn user_scores(&self, user_name: &str) -> Result<Vec<Score>, GameError> {
        let user = self.find_user(user_name)?;
        Ok(self.store.scores_for_user(user.id)?)
    }

    /// The `count` best winning scores
    ///
    /// # Errors
    /// Storage failures.
    pub fn high_scores(&self, count: usize) -> Result<Vec<Score>, GameError> {
        Ok(ranking::high_scores(self.store.scores()?, count))
    }

    /// Every user ordered by ranking, unranked users last
    ///
    /// # Errors
    /// Storage failures.
    pub fn user_rankings(&self) -> Result<Vec<User>, GameError> {
        Ok(ranking::order_by_ranking(self.store.users()?))
    }

    /// Recompute all rankings from the full score history
    ///
    /// # Errors
    /// Storage failures.
    pub fn recompute_rankings(&self) -> Result<Vec<Standing>, GameError> {
        Ok(RankingEngine::recompute(self.store.as_ref())?)
    }

    /// Cached active game count message
    #[must_use]
    pub fn active_game_count(&self) -> String {
        self.active_games.message()
    }

    fn load_game(&self, game_id: GameId) -> Result<Game, GameError> {
        self.store
            .game(game_id)?
            .ok_or(GameError::GameNotFound(game_id))
    }

    fn finish(&self, game: &Game) -> Result<Score, GameError> {
        let won = game.outcome() == Some(Outcome::Win);
        let score = self.store.finish_game(game, won, game.guesses_made())?;
        log::info!(
            "Game {} {} after {} guesses",
            game.id,
            if won { "won" } else { "lost" },
            score.guesses
        );
        if let Err(e) = self.recompute_rankings() {
            log::warn!("Ranking recompute after game {} failed: {e}", game.id);
        }
        Ok(score)
    }
}
