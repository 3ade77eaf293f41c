pub mod season;
pub mod stats;
pub mod table;

pub use season::Season;
pub use stats::{ExtraStat, Position};
pub use table::{RawRows, StatsTable};

use std::time::Instant;

use crate::error::AppError;

/// Normalized tables for one season, the unit stored by the season cache.
#[derive(Debug, Clone)]
pub struct SeasonTables {
    pub season: Season,
    /// Display-ready table with the excluded columns removed
    pub trimmed: StatsTable,
    /// Cleaned table with every published column, row-aligned with `trimmed`
    pub raw: StatsTable,
    pub fetched_at: Instant,
}

impl SeasonTables {
    /// Team codes present in the season, sorted, for the team selector.
    pub fn team_options(&self) -> Result<Vec<String>, AppError> {
        crate::filter::team_options(&self.trimmed)
    }
}
