//! Value objects handed back to callers

use crate::core::{Game, GameId, Letter, Move, Outcome, Score, UserId};

/// Snapshot of a game as shown to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub game_id: GameId,
    pub user: UserId,
    /// Secret word with unguessed letters masked
    pub obscured_word: String,
    pub attempts_remaining: u32,
    pub game_over: bool,
    pub cancelled: bool,
    pub outcome: Option<Outcome>,
    /// Wrong letters in alphabetical order
    pub wrong_letters: Vec<Letter>,
    pub message: String,
    /// Revealed once the game is finished or cancelled
    pub word: Option<String>,
}

impl GameView {
    #[must_use]
    pub fn new(game: &Game, message: impl Into<String>) -> Self {
        let mut wrong_letters: Vec<Letter> = game.wrong_letters().iter().copied().collect();
        wrong_letters.sort_unstable();

        Self {
            game_id: game.id,
            user: game.user,
            obscured_word: game.obscured_word(),
            attempts_remaining: game.attempts_remaining(),
            game_over: game.is_over(),
            cancelled: game.is_cancelled(),
            outcome: game.outcome(),
            wrong_letters,
            message: message.into(),
            word: game
                .status()
                .is_terminal()
                .then(|| game.word().text().to_string()),
        }
    }
}

/// Everything one guess produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub view: GameView,
    pub result: Move,
    /// Set only when this guess finished the game
    pub score: Option<Score>,
}
