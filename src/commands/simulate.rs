//! Concurrent bot games
//!
//! Bot players share one session and play in parallel on the rayon pool, so
//! every finishing game races the others into the ranking recompute.

use crate::core::{Letter, Score, User, WORD_LENGTHS};
use crate::engine::{DEFAULT_HIGH_SCORES, GameError, GameSession, Standing};
use crate::storage::Storage;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Letters in rough English frequency order
const FREQUENCY_ORDER: &[u8] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub players: usize,
    pub games_per_player: usize,
    /// Lengths to draw words from, uniformly
    pub word_lengths: Vec<usize>,
    /// Chance in [0, 1] that a bot guesses a random letter instead of the next
    /// most frequent one
    pub randomness: f64,
    pub show_progress: bool,
}

/// Parse a bot randomness argument, a finite number in [0, 1]
///
/// # Errors
/// A message for clap when the value is not a number or out of range.
pub fn parse_randomness(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("`{raw}` must be between 0 and 1"))
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(players: usize, games_per_player: usize) -> Self {
        Self {
            players,
            games_per_player,
            word_lengths: WORD_LENGTHS.collect(),
            randomness: 0.3,
            show_progress: true,
        }
    }

    /// `randomness` as a valid probability; NaN counts as zero
    #[must_use]
    pub fn random_chance(&self) -> f64 {
        if self.randomness.is_nan() {
            0.0
        } else {
            self.randomness.clamp(0.0, 1.0)
        }
    }
}

/// Totals for one simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub players: usize,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub duration: Duration,
    pub standings: Vec<Standing>,
    pub users: Vec<User>,
    pub high_scores: Vec<Score>,
    pub active_games: String,
}

impl SimulationResult {
    /// Share of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play `players * games_per_player` bot games against one session
///
/// Bots are registered as `bot-001`, `bot-002`, ... and must not already exist.
///
/// # Errors
/// The first engine error any bot hits, such as a length with no words.
pub fn run_simulation<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let total = config.players * config.games_per_player;
    let pb = if config.show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let tallies = (1..=config.players)
        .into_par_iter()
        .map(|n| {
            let name = format!("bot-{n:03}");
            session.create_user(&name, None)?;

            let mut wins = 0;
            for _ in 0..config.games_per_player {
                if play_bot_game(session, &name, config)? {
                    wins += 1;
                }
                pb.inc(1);
            }
            log::debug!("{name} won {wins}/{}", config.games_per_player);
            Ok(wins)
        })
        .collect::<Result<Vec<usize>, GameError>>();
    pb.finish_with_message("Complete!");
    let wins: usize = tallies?.iter().sum();

    Ok(SimulationResult {
        players: config.players,
        games: total,
        wins,
        losses: total - wins,
        duration: start.elapsed(),
        standings: session.recompute_rankings()?,
        users: session.user_rankings()?,
        high_scores: session.high_scores(DEFAULT_HIGH_SCORES)?,
        active_games: session.active_game_count(),
    })
}

/// Play one game to the end; returns whether the bot won
fn play_bot_game<S: Storage + ?Sized + 'static, W: WordSource>(
    session: &GameSession<S, W>,
    name: &str,
    config: &SimulationConfig,
) -> Result<bool, GameError> {
    let mut rng = rand::rng();
    let length = config
        .word_lengths
        .get(rng.random_range(0..config.word_lengths.len().max(1)))
        .copied()
        .unwrap_or(*WORD_LENGTHS.start());
    let view = session.new_game(name, length)?;

    let mut random_order: Vec<Letter> = Letter::alphabet().collect();
    random_order.shuffle(&mut rng);
    let mut frequent = FREQUENCY_ORDER.iter().filter_map(|&b| Letter::from_byte(b));
    let mut random = random_order.into_iter();

    loop {
        let letter = if rng.random_bool(config.random_chance()) {
            random.next().or_else(|| frequent.next())
        } else {
            frequent.next().or_else(|| random.next())
        };
        // All 26 letters guessed
        let Some(letter) = letter else {
            return Ok(false);
        };

        let report = session.apply_guess(view.game_id, &letter.to_string())?;
        if report.view.game_over {
            return Ok(report.score.is_some_and(|score| score.won));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameConfig;
    use crate::storage::MemoryStore;
    use crate::wordlists::{FixedWord, WordBank};
    use std::sync::Arc;

    fn quiet(players: usize, games: usize) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(players, games)
        }
    }

    #[test]
    fn randomness_argument_must_be_a_probability() {
        assert_eq!(parse_randomness("0.25"), Ok(0.25));
        assert_eq!(parse_randomness("1"), Ok(1.0));
        assert!(parse_randomness("nan").is_err());
        assert!(parse_randomness("inf").is_err());
        assert!(parse_randomness("-0.1").is_err());
        assert!(parse_randomness("1.5").is_err());
        assert!(parse_randomness("lots").is_err());
    }

    #[test]
    fn random_chance_is_always_a_probability() {
        let chance = |randomness| SimulationConfig { randomness, ..quiet(1, 1) }.random_chance();
        assert!(chance(f64::NAN).abs() < f64::EPSILON);
        assert!((chance(f64::INFINITY) - 1.0).abs() < f64::EPSILON);
        assert!(chance(-3.0).abs() < f64::EPSILON);
        assert!((chance(0.4) - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_randomness_plays_frequency_order() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            FixedWord::new("helloworld"),
            GameConfig::new().with_attempts(26),
        );
        let config = SimulationConfig {
            word_lengths: vec![10],
            randomness: f64::NAN,
            ..quiet(1, 1)
        };
        let result = run_simulation(&session, &config).unwrap();
        assert_eq!(result.wins, 1);
    }

    #[test]
    fn every_game_is_scored_once() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            WordBank::embedded(),
            GameConfig::new(),
        );
        let result = run_simulation(&session, &quiet(4, 3)).unwrap();

        assert_eq!(result.games, 12);
        assert_eq!(result.wins + result.losses, 12);
        assert_eq!(session.all_scores().unwrap().len(), 12);
        assert_eq!(result.standings.len(), 4);
        assert_eq!(result.users.len(), 4);
    }

    #[test]
    fn ranks_are_dense_and_match_users() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            WordBank::embedded(),
            GameConfig::new(),
        );
        let result = run_simulation(&session, &quiet(6, 2)).unwrap();

        let ranks: Vec<u32> = result.standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, (1..=6).collect::<Vec<u32>>());
        for standing in &result.standings {
            let user = result.users.iter().find(|u| u.id == standing.user).unwrap();
            assert_eq!(user.ranking, Some(standing.rank));
        }
    }

    #[test]
    fn frequency_bot_wins_with_generous_attempts() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            FixedWord::new("helloworld"),
            GameConfig::new().with_attempts(26),
        );
        let config = SimulationConfig {
            word_lengths: vec![10],
            randomness: 0.0,
            ..quiet(2, 2)
        };
        let result = run_simulation(&session, &config).unwrap();

        assert_eq!(result.wins, 4);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.high_scores.len(), DEFAULT_HIGH_SCORES);
    }

    #[test]
    fn missing_length_is_an_error() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            FixedWord::new("helloworld"),
            GameConfig::new(),
        );
        let config = SimulationConfig {
            word_lengths: vec![12],
            ..quiet(1, 1)
        };
        assert!(matches!(
            run_simulation(&session, &config),
            Err(GameError::NoWordOfLength(12))
        ));
    }

    #[test]
    fn empty_simulation() {
        let session = GameSession::new(
            Arc::new(MemoryStore::new()),
            WordBank::embedded(),
            GameConfig::new(),
        );
        let result = run_simulation(&session, &quiet(0, 5)).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.standings.is_empty());
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
