pub mod season_cache;
pub mod types;

pub use season_cache::SeasonCache;
pub use types::{CacheStats, SeasonSlot, is_expired};
