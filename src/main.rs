//! Hangman - CLI
//!
//! Play Hangman in the terminal, or let bot players fill the leaderboard.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{
        SimulationConfig, run_play, run_simulation, simulate::parse_randomness, summarize_words,
    },
    core::DEFAULT_ATTEMPTS,
    engine::{GameConfig, GameSession},
    output::{print_simulation_result, print_word_summary},
    storage::MemoryStore,
    wordlists::{WordBank, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Multiplayer Hangman with scores and a leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wrong guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: u32,

    /// Secret word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Player name, asked for when missing
        #[arg(short, long)]
        name: Option<String>,

        /// Word length for the first game (10-20)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Let bot players play concurrently against one shared store
    Simulate {
        /// Number of bot players
        #[arg(short, long, default_value = "8")]
        players: usize,

        /// Games per bot player
        #[arg(short = 'g', long, default_value = "5")]
        games: usize,

        /// Chance (0-1) that a bot guesses a random letter
        #[arg(short, long, default_value = "0.3", value_parser = parse_randomness)]
        randomness: f64,
    },

    /// Show how many words the list has per length
    Words,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Load the word bank from `path`, or the built-in list
fn load_words(path: Option<&Path>) -> Result<WordBank> {
    let bank = match path {
        Some(path) => WordBank::new(
            load_from_file(path)
                .with_context(|| format!("loading word list {}", path.display()))?,
        ),
        None => WordBank::embedded(),
    };
    log::info!("Loaded {} secret words", bank.len());
    Ok(bank)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_words(cli.wordlist.as_deref())?;
    let config = GameConfig::new().with_attempts(cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        name: None,
        length: None,
    });

    match command {
        Commands::Play { name, length } => {
            let session = GameSession::new(Arc::new(MemoryStore::new()), words, config);
            run_play(&session, name.as_deref(), length).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Simulate {
            players,
            games,
            randomness,
        } => run_simulate_command(words, config, players, games, randomness),
        Commands::Words => {
            print_word_summary(&summarize_words(&words));
            Ok(())
        }
    }
}

fn run_simulate_command(
    words: WordBank,
    config: GameConfig,
    players: usize,
    games: usize,
    randomness: f64,
) -> Result<()> {
    let word_lengths: Vec<usize> = words
        .length_counts()
        .into_iter()
        .map(|(length, _)| length)
        .collect();
    if word_lengths.is_empty() {
        bail!("the word list has no playable words");
    }

    println!("🎯 {players} players, {games} games each...");

    let session = GameSession::new(Arc::new(MemoryStore::new()), words, config);
    let sim_config = SimulationConfig {
        word_lengths,
        randomness,
        ..SimulationConfig::new(players, games)
    };
    let result = run_simulation(&session, &sim_config)?;
    print_simulation_result(&result);
    Ok(())
}
