//! Hangman
//!
//! A multiplayer Hangman engine: players start games of a chosen word length,
//! guess letters, and every finished game feeds a leaderboard ranked by
//! average guesses per game.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use hangman::engine::{GameConfig, GameSession};
//! use hangman::storage::MemoryStore;
//! use hangman::wordlists::WordBank;
//!
//! let session = GameSession::new(
//!     Arc::new(MemoryStore::new()),
//!     WordBank::embedded(),
//!     GameConfig::default(),
//! );
//! session.create_user("ann", None).unwrap();
//!
//! let view = session.new_game("ann", 10).unwrap();
//! assert_eq!(view.obscured_word, "__________");
//!
//! let report = session.apply_guess(view.game_id, "e").unwrap();
//! println!("{}", report.view.message);
//! ```

// Core domain types
pub mod core;

// Sessions, ranking and statistics
pub mod engine;

// Persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
