//! Stored records: users, scores and their identifiers

use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a registered user
    UserId
);
record_id!(
    /// Identifier of a game session
    GameId
);
record_id!(
    /// Identifier of a score record
    ScoreId
);

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Unique across all users
    pub name: String,
    pub email: Option<String>,
    /// 1-based leaderboard position; `None` until the user has a finished game
    pub ranking: Option<u32>,
}

impl User {
    #[must_use]
    pub const fn new(id: UserId, name: String, email: Option<String>) -> Self {
        Self {
            id,
            name,
            email,
            ranking: None,
        }
    }
}

/// Outcome of one finished game. Never modified after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub id: ScoreId,
    pub user: UserId,
    pub game: GameId,
    pub won: bool,
    /// Correct plus wrong guesses made over the game
    pub guesses: u32,
}
