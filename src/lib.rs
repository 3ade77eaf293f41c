//! NBA Player Stats Library
//!
//! This library fetches the per-game player statistics table for an NBA
//! season, filters it by team and position, and exports the selection as a
//! downloadable CSV.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_player_stats::data_fetcher::{ExtraStat, HttpStatsSource, Season, SeasonCache};
//! use nba_player_stats::filter::{FilterCriteria, filter};
//! use nba_player_stats::{AppError, Config, export};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let cache = SeasonCache::from_config(HttpStatsSource::from_config(&config)?, &config)?;
//!
//!     // Fetch and normalize the season
//!     let tables = cache.load(Season::new(2019)?).await?;
//!
//!     // Narrow it down to the Lakers' guards, with turnovers added back
//!     let criteria = FilterCriteria::new()
//!         .with_teams(["LAL"])
//!         .with_positions(["PG", "SG"])
//!         .with_extra_stat(ExtraStat::Turnovers);
//!     let result = filter(&tables.trimmed, &tables.raw, &criteria)?;
//!
//!     println!("{}", export::encode(result.table())?.html_link());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod filter;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::cache::{CacheStats, SeasonCache};
pub use data_fetcher::models::{ExtraStat, Position, Season, SeasonTables, StatsTable};
pub use data_fetcher::source::{HttpStatsSource, StatsSource};
pub use error::AppError;
pub use export::ExportArtifact;
pub use filter::{FilterCriteria, FilteredResult};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
