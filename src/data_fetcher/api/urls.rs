//! URL building utilities for the statistics source

use crate::data_fetcher::models::Season;

/// Builds the URL of the per-game statistics page for a season.
///
/// # Arguments
/// * `source_url` - The base URL of the statistics source
/// * `season` - The season to fetch
///
/// # Example
/// ```
/// use nba_player_stats::data_fetcher::api::build_season_url;
/// use nba_player_stats::data_fetcher::models::Season;
///
/// let season = Season::new(2019).unwrap();
/// let url = build_season_url("https://www.basketball-reference.com", season);
/// assert_eq!(url, "https://www.basketball-reference.com/leagues/NBA_2019_per_game.html");
/// ```
pub fn build_season_url(source_url: &str, season: Season) -> String {
    format!(
        "{}/leagues/NBA_{}_per_game.html",
        source_url.trim_end_matches('/'),
        season.year()
    )
}
