//! Leaderboard ranking
//!
//! Rankings are rebuilt from the complete score history every time a game
//! finishes. Nothing is adjusted incrementally. The read, compute and write run
//! inside [`Storage::rerank`], which the store executes exclusively, so
//! recomputes from any number of sessions sharing a store apply one after the
//! other against current data.

use crate::core::{Score, User, UserId};
use crate::storage::{Storage, StorageError};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Number of high scores returned when the caller does not ask for a count
pub const DEFAULT_HIGH_SCORES: usize = 3;

/// One ranked user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub user: UserId,
    pub name: String,
    /// 1-based, 1 is best
    pub rank: u32,
    /// Finished games, always at least one
    pub games: u32,
    pub total_guesses: u64,
}

impl Standing {
    /// Average guesses per finished game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        average(self.total_guesses, self.games).unwrap_or(0.0)
    }

    /// Exact comparison of averages, without going through floats
    fn cmp_average(&self, other: &Self) -> Ordering {
        (self.total_guesses * u64::from(other.games))
            .cmp(&(other.total_guesses * u64::from(self.games)))
    }
}

/// Guesses per game, `None` when there are no games
#[must_use]
pub fn average(total_guesses: u64, games: u32) -> Option<f64> {
    if games == 0 {
        None
    } else {
        Some(total_guesses as f64 / f64::from(games))
    }
}

/// Rank users by ascending average guesses per finished game
///
/// Users without scores are left out. Equal averages fall back to user name,
/// then user id, so the order never depends on storage iteration order.
#[must_use]
pub fn compute_rankings(users: &[User], scores: &[Score]) -> Vec<Standing> {
    let mut tally: FxHashMap<UserId, (u64, u32)> = FxHashMap::default();
    for score in scores {
        let entry = tally.entry(score.user).or_insert((0, 0));
        entry.0 += u64::from(score.guesses);
        entry.1 += 1;
    }

    let mut standings: Vec<Standing> = users
        .iter()
        .filter_map(|user| {
            let &(total_guesses, games) = tally.get(&user.id)?;
            (games > 0).then(|| Standing {
                user: user.id,
                name: user.name.clone(),
                rank: 0,
                games,
                total_guesses,
            })
        })
        .collect();

    standings.sort_by(|a, b| {
        a.cmp_average(b)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.user.cmp(&b.user))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index as u32 + 1;
    }

    standings
}

/// Recomputes stored rankings
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    /// Recompute every user's ranking from the full score history and save it
    ///
    /// Users without finished games have their ranking cleared.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn recompute<S: Storage + ?Sized>(store: &S) -> Result<Vec<Standing>, StorageError> {
        let mut standings = Vec::new();
        let mut scored = 0;
        let changed = store.rerank(&mut |users, scores| {
            standings = compute_rankings(users, scores);
            scored = scores.len();
            standings.iter().map(|s| (s.user, s.rank)).collect()
        })?;

        log::info!(
            "Recomputed rankings: {} ranked users from {scored} scores, {changed} changed",
            standings.len()
        );
        Ok(standings)
    }
}

/// Every user ordered by ranking, unranked users last by name
#[must_use]
pub fn order_by_ranking(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| match (a.ranking, b.ranking) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
    users
}

/// Won scores with the fewest guesses first, at most `count`
#[must_use]
pub fn high_scores(scores: Vec<Score>, count: usize) -> Vec<Score> {
    let mut won: Vec<Score> = scores.into_iter().filter(|s| s.won).collect();
    won.sort_by_key(|s| s.guesses);
    won.truncate(count);
    won
}
