pub mod api;
pub mod cache;
pub mod models;
pub mod processors;
pub mod source;

pub use cache::SeasonCache;
pub use models::{ExtraStat, Position, RawRows, Season, SeasonTables, StatsTable};
pub use processors::normalize;
pub use source::{HttpStatsSource, StatsSource};
