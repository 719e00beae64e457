//! Engine configuration

use crate::core::DEFAULT_ATTEMPTS;

/// Tunables for new games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong guesses a player may make before losing
    pub starting_attempts: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            starting_attempts: DEFAULT_ATTEMPTS,
        }
    }

    /// Override the starting attempts; zero is raised to one
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u32) -> Self {
        self.starting_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
