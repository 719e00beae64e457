//! Cached active game count
//!
//! Refreshed on a detached rayon task after each new game. A failed refresh is
//! logged and otherwise ignored; the previous value stays cached. Each refresh
//! draws a ticket before it reads the store, and a result is only kept if no
//! refresh with a later ticket has been stored yet, so a slow refresh cannot
//! overwrite a newer count.

use crate::storage::{Storage, StorageError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Shown when nothing has been counted yet, or nothing is active
pub const NO_ACTIVE_GAMES: &str = "There are no active games at the moment";

#[derive(Debug, Default)]
struct Snapshot {
    ticket: u64,
    count: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ActiveGamesCache {
    snapshot: Arc<RwLock<Snapshot>>,
    tickets: Arc<AtomicU64>,
}

impl ActiveGamesCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count active games on the rayon pool without waiting for the result
    pub fn refresh_in_background<S: Storage + ?Sized + 'static>(&self, store: Arc<S>) {
        let cache = self.clone();
        rayon::spawn(move || {
            if let Err(e) = cache.refresh(store.as_ref()) {
                log::warn!("Active game count refresh failed: {e}");
            }
        });
    }

    /// Count active games now and cache the result
    ///
    /// # Errors
    /// Storage failures while listing games, or a poisoned cache lock.
    pub fn refresh<S: Storage + ?Sized>(&self, store: &S) -> Result<usize, StorageError> {
        let ticket = self.next_ticket();
        let active = store
            .games()?
            .iter()
            .filter(|game| !game.status().is_terminal())
            .count();

        self.record(ticket, active)?;
        Ok(active)
    }

    fn next_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Keep `count` unless a later ticket is already stored
    fn record(&self, ticket: u64, count: usize) -> Result<(), StorageError> {
        let mut snapshot = self.snapshot.write().map_err(|_| StorageError::Poisoned)?;
        if ticket > snapshot.ticket {
            *snapshot = Snapshot {
                ticket,
                count: Some(count),
            };
            log::debug!("Cached active game count: {count}");
        }
        Ok(())
    }

    /// Last cached count, if any
    #[must_use]
    pub fn cached(&self) -> Option<usize> {
        self.snapshot.read().ok().and_then(|snapshot| snapshot.count)
    }

    /// Player-facing message for the cached count
    #[must_use]
    pub fn message(&self) -> String {
        match self.cached() {
            Some(count) if count > 0 => format!("The number of active games is {count}"),
            _ => NO_ACTIVE_GAMES.to_string(),
        }
    }
}
