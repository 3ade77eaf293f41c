//! Season cache: memoized, LRU-bounded loading of normalized season tables

use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheStats, SeasonSlot, is_expired};
use crate::config::Config;
use crate::data_fetcher::models::{Season, SeasonTables};
use crate::data_fetcher::processors::normalize;
use crate::data_fetcher::source::StatsSource;
use crate::error::AppError;

/// Loaded seasons plus the loads still running.
///
/// In-flight loads live outside the LRU so eviction can never split one
/// season into two concurrent fetches.
struct Entries {
    loaded: LruCache<Season, Arc<SeasonTables>>,
    in_flight: HashMap<Season, Arc<SeasonSlot>>,
}

enum Lookup {
    Cached(Arc<SeasonTables>),
    InFlight(Arc<SeasonSlot>),
}

/// Memoizes `load(season)` over an injectable [`StatsSource`].
///
/// - a season is fetched and normalized at most once while its entry lives
/// - concurrent loads of one season share a single in-flight fetch
/// - entries expire after the optional TTL, or when invalidated explicitly
/// - a failed fetch is not cached, the next load fetches again
pub struct SeasonCache<S> {
    source: S,
    entries: Mutex<Entries>,
    ttl: Option<Duration>,
}

impl<S: StatsSource> SeasonCache<S> {
    /// Creates a cache holding up to `capacity` seasons, without expiry.
    pub fn new(source: S, capacity: NonZeroUsize) -> Self {
        Self {
            source,
            entries: Mutex::new(Entries {
                loaded: LruCache::new(capacity),
                in_flight: HashMap::new(),
            }),
            ttl: None,
        }
    }

    /// Creates a cache sized and timed from configuration.
    pub fn from_config(source: S, config: &Config) -> Result<Self, AppError> {
        let capacity = NonZeroUsize::new(config.cache_capacity)
            .ok_or_else(|| AppError::config_error("Cache capacity must be greater than zero"))?;
        let cache = Self::new(source, capacity);
        Ok(match config.cache_ttl_seconds {
            Some(seconds) => cache.with_ttl(Duration::from_secs(seconds)),
            None => cache,
        })
    }

    /// Expires entries older than `ttl`.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the trimmed and raw tables for `season`, fetching them on first use.
    ///
    /// # Errors
    /// * Data-unavailable errors from the source
    /// * `AppError::SchemaMismatch` - The source table lacks an expected column
    #[instrument(skip(self), fields(season = %season))]
    pub async fn load(&self, season: Season) -> Result<Arc<SeasonTables>, AppError> {
        let slot = match self.lookup(season).await {
            Lookup::Cached(tables) => return Ok(tables),
            Lookup::InFlight(slot) => slot,
        };

        let outcome = slot
            .cell()
            .get_or_try_init(|| async {
                info!("Cache miss for season {}, fetching from source", season);
                let rows = self.source.fetch_season(season).await?;
                normalize(season, rows).map(Arc::new)
            })
            .await
            .map(Arc::clone);

        self.settle(season, slot).await;
        outcome.inspect_err(|e| warn!("Failed to load season {}: {}", season, e))
    }

    /// Returns live cached tables, or the in-flight load to wait on.
    async fn lookup(&self, season: Season) -> Lookup {
        let mut entries = self.entries.lock().await;

        let cached = entries
            .loaded
            .get(&season)
            .map(|tables| (Arc::clone(tables), is_expired(tables, self.ttl)));
        match cached {
            Some((tables, false)) => {
                debug!("Cache hit for season {}", season);
                return Lookup::Cached(tables);
            }
            Some((_, true)) => {
                debug!("Cache entry for season {} expired", season);
                entries.loaded.pop(&season);
            }
            None => {}
        }

        let slot = entries.in_flight.entry(season).or_insert_with(|| {
            debug!("Starting load for season {}", season);
            Arc::new(SeasonSlot::new())
        });
        Lookup::InFlight(Arc::clone(slot))
    }

    /// Moves a finished load into the LRU, or forgets it once its last
    /// waiter has failed.
    async fn settle(&self, season: Season, slot: Arc<SeasonSlot>) {
        let mut entries = self.entries.lock().await;

        let is_current = entries
            .in_flight
            .get(&season)
            .is_some_and(|pending| Arc::ptr_eq(pending, &slot));
        if is_current {
            if let Some(tables) = slot.get() {
                entries.in_flight.remove(&season);
                entries.loaded.put(season, Arc::clone(tables));
                debug!("Cached season {}", season);
            } else if Arc::strong_count(&slot) <= 2 {
                // Only the map and this caller hold the slot
                entries.in_flight.remove(&season);
                debug!("Dropped failed load for season {}", season);
            }
        }

        // Released under the lock so the next settling waiter sees an exact count
        drop(slot);
        drop(entries);
    }

    /// Checks if live tables are cached for `season` without touching LRU order.
    pub async fn contains(&self, season: Season) -> bool {
        self.entries
            .lock()
            .await
            .loaded
            .peek(&season)
            .is_some_and(|tables| !is_expired(tables, self.ttl))
    }

    /// Drops the cached tables for `season`. Returns whether any existed.
    ///
    /// A load already in flight is not cancelled.
    pub async fn invalidate(&self, season: Season) -> bool {
        let removed = self.entries.lock().await.loaded.pop(&season).is_some();
        if removed {
            info!("Invalidated cache entry for season {}", season);
        }
        removed
    }

    /// Drops every cached season. Loads in flight still complete.
    pub async fn clear(&self) {
        self.entries.lock().await.loaded.clear();
        info!("Cleared season cache");
    }

    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().await;
        CacheStats {
            size: entries.loaded.len(),
            capacity: entries.loaded.cap().get(),
            in_flight: entries.in_flight.len(),
        }
    }
}
