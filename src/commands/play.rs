//! Interactive text game
//!
//! One player against the engine on stdin/stdout.

use crate::core::{GameId, WORD_LENGTHS};
use crate::engine::{DEFAULT_HIGH_SCORES, GameError, GameSession, GameView};
use crate::output::{print_game_view, print_high_scores, print_leaderboard};
use crate::storage::Storage;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    Cancel,
    NewGame,
    Guess(String),
}

impl PlayerInput {
    /// Interpret a trimmed input line; anything that is not a command is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Self::Quit,
            "cancel" | ":c" => Self::Cancel,
            "new" | ":n" => Self::NewGame,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Register `name`, or reuse the account if it already exists
///
/// # Errors
/// Storage failures.
pub fn ensure_user<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    name: &str,
) -> Result<(), GameError> {
    match session.create_user(name, None) {
        Ok(_) | Err(GameError::UserExists(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Run the interactive game loop
///
/// Missing `name` or `length` are asked for on stdin.
///
/// # Errors
///
/// Returns an error on I/O failure or when the engine rejects a request that
/// cannot be retried, such as a storage failure.
pub fn run_play<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    name: Option<&str>,
    length: Option<usize>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         H A N G M A N                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess one letter at a time.");
    println!("Commands: 'cancel' to give up, 'new' for a new game, 'quit' to exit\n");

    let name = match name {
        Some(name) => name.to_string(),
        None => loop {
            let input = get_user_input("Your name")?;
            if !input.is_empty() {
                break input;
            }
        },
    };
    ensure_user(session, &name).map_err(|e| e.to_string())?;

    let attempts = session.config().starting_attempts;
    let mut length = length;

    loop {
        let Some(view) = start_game(session, &name, length.take())? else {
            continue;
        };
        print_game_view(&view, attempts);

        if !play_one(session, view.game_id, attempts)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Start a game, asking for the length when none was given
///
/// Returns `None` when the length was rejected, so the caller asks again.
fn start_game<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    name: &str,
    length: Option<usize>,
) -> Result<Option<GameView>, String> {
    let length = match length {
        Some(length) => length,
        None => {
            let prompt = format!(
                "Word length ({}-{})",
                WORD_LENGTHS.start(),
                WORD_LENGTHS.end()
            );
            match get_user_input(&prompt)?.parse::<usize>() {
                Ok(length) => length,
                Err(_) => {
                    println!("{}\n", "Please enter a number.".red());
                    return Ok(None);
                }
            }
        }
    };

    match session.new_game(name, length) {
        Ok(view) => Ok(Some(view)),
        Err(e @ (GameError::InvalidWordLength(_) | GameError::NoWordOfLength(_))) => {
            println!("{}\n", e.to_string().red());
            Ok(None)
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Play until the game ends; returns whether the player wants another game
fn play_one<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    game_id: GameId,
    attempts: u32,
) -> Result<bool, String> {
    loop {
        let input = get_user_input("Guess")?;
        match PlayerInput::parse(&input) {
            PlayerInput::Quit => return Ok(false),
            PlayerInput::NewGame => return Ok(true),
            PlayerInput::Cancel => {
                let view = session.cancel_game(game_id).map_err(|e| e.to_string())?;
                print_game_view(&view, attempts);
                break;
            }
            PlayerInput::Guess(raw) => {
                let report = session
                    .apply_guess(game_id, &raw)
                    .map_err(|e| e.to_string())?;
                print_game_view(&report.view, attempts);
                if report.view.game_over {
                    break;
                }
            }
        }
    }

    let standings = session.recompute_rankings().map_err(|e| e.to_string())?;
    let users = session.user_rankings().map_err(|e| e.to_string())?;
    let best = session
        .high_scores(DEFAULT_HIGH_SCORES)
        .map_err(|e| e.to_string())?;
    print_leaderboard(&standings);
    print_high_scores(&best, &users);
    println!("\n{}", session.active_game_count().bright_black());

    let again = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(again.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("input closed".to_string());
    }

    Ok(input.trim().to_string())
}
