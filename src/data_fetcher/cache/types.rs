//! Cache entry types with TTL support

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::data_fetcher::models::SeasonTables;

/// A season load in progress.
///
/// The cell is filled at most once. Callers that arrive while a fetch is in
/// flight wait on the same cell instead of starting their own fetch.
#[derive(Debug, Default)]
pub struct SeasonSlot {
    cell: OnceCell<Arc<SeasonTables>>,
}

impl SeasonSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self) -> &OnceCell<Arc<SeasonTables>> {
        &self.cell
    }

    /// The loaded tables, if the fetch has completed.
    pub fn get(&self) -> Option<&Arc<SeasonTables>> {
        self.cell.get()
    }
}

/// Checks if cached tables are older than `ttl`. Without a TTL nothing expires.
pub fn is_expired(tables: &SeasonTables, ttl: Option<Duration>) -> bool {
    let Some(ttl) = ttl else {
        return false;
    };
    let age = tables.fetched_at.elapsed();
    let is_expired = age > ttl;

    debug!(
        "Season cache expiration check: season={}, age={:?}, ttl={:?}, is_expired={}",
        tables.season, age, ttl, is_expired
    );

    is_expired
}

/// Snapshot of season cache occupancy for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Loaded seasons held by the LRU
    pub size: usize,
    pub capacity: usize,
    /// Seasons currently being fetched
    pub in_flight: usize,
}
