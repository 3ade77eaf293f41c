//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed schema knowledge about the statistics
//! source along with default tuning values.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default base URL of the statistics source
pub const DEFAULT_SOURCE_URL: &str = "https://www.basketball-reference.com";

/// Default number of seasons kept in the season cache
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Season bounds offered by the season selector
pub mod seasons {
    /// Oldest season with a published per-game table
    pub const EARLIEST: u16 = 1950;

    /// Newest season offered for selection
    pub const LATEST: u16 = 2019;
}

/// Column names of the published per-game table
pub mod columns {
    pub const PLAYER: &str = "Player";
    pub const TEAM: &str = "Tm";
    pub const POSITION: &str = "Pos";
    pub const AGE: &str = "Age";

    /// Columns the rest of the pipeline cannot work without
    pub const REQUIRED: [&str; 4] = [AGE, TEAM, POSITION, PLAYER];

    /// Columns removed from the raw table to build the trimmed player table.
    /// Rank, shooting percentages, attempt counts, games started, turnovers
    /// and the split rebound columns.
    pub const EXCLUDED: [&str; 14] = [
        "Rk", "FG%", "3P%", "2P%", "eFG%", "FT%", "GS", "TOV", "2PA", "3PA", "FTA", "FGA", "ORB",
        "DRB",
    ];

    /// Replacement for missing cells
    pub const MISSING_VALUE: &str = "0";
}

/// Export artifact settings
pub mod export {
    /// File name of the downloadable CSV artifact
    pub const FILE_NAME: &str = "playerstats.csv";

    /// MIME prefix used in the data URI
    pub const DATA_URI_PREFIX: &str = "data:file/csv;base64,";

    /// Text of the rendered download link
    pub const LINK_TEXT: &str = "Download CSV File";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for source URL override
    pub const SOURCE_URL: &str = "NBA_STATS_SOURCE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NBA_STATS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_STATS_HTTP_TIMEOUT";
}

/// User-facing messages
pub mod messages {
    pub const NO_SELECTION: &str = "No Team and Position Selected!";
    pub const NO_MATCHES: &str = "No players match the selected teams and positions.";
    pub const PLAYERS_FOUND_PREFIX: &str = "Number of Players found: ";
}

/// Default log file name
pub const LOG_FILE_NAME: &str = "nba_player_stats.log";
