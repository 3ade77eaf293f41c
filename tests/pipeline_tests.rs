//! End-to-end tests of the season pipeline: page extraction, normalization,
//! filtering and export, driven through the public library API.

use nba_player_stats::constants::columns::EXCLUDED;
use nba_player_stats::data_fetcher::models::RawRows;
use nba_player_stats::data_fetcher::processors::extract_first_table;
use nba_player_stats::data_fetcher::{ExtraStat, Position, Season, SeasonCache, StatsSource};
use nba_player_stats::error::AppError;
use nba_player_stats::export::{decode, decode_data_uri, encode};
use nba_player_stats::filter::{FilterCriteria, filter};
use nba_player_stats::testing_utils::{FIXTURE_PLAYERS, TestDataBuilder};
use std::num::NonZeroUsize;

/// Serves the fixture season page through the HTML extractor.
struct PageSource;

impl StatsSource for PageSource {
    async fn fetch_season(&self, season: Season) -> Result<RawRows, AppError> {
        let url = format!("fixture://NBA_{season}_per_game.html");
        extract_first_table(&TestDataBuilder::season_page_html(), &url)
    }
}

fn cache() -> SeasonCache<PageSource> {
    SeasonCache::new(PageSource, NonZeroUsize::new(2).unwrap())
}

fn all_teams() -> Vec<&'static str> {
    FIXTURE_PLAYERS.iter().map(|p| p.team).collect()
}

#[tokio::test]
async fn test_load_trims_excluded_columns_and_header_rows() {
    let tables = cache().load(Season::LATEST).await.unwrap();

    assert_eq!(tables.raw.len(), FIXTURE_PLAYERS.len());
    assert_eq!(tables.trimmed.len(), tables.raw.len());
    assert!(tables.raw.column("Age").unwrap().iter().all(|age| *age != "Age"));

    let expected: Vec<&String> = tables
        .raw
        .columns()
        .iter()
        .filter(|c| !EXCLUDED.contains(&c.as_str()))
        .collect();
    assert_eq!(tables.trimmed.columns().iter().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn test_missing_cells_become_zero() {
    let tables = cache().load(Season::LATEST).await.unwrap();

    // The second fixture player has no 3P% on the page
    assert_eq!(tables.raw.cell(1, "Player"), Some("Bam Adebayo"));
    assert_eq!(tables.raw.cell(1, "3P%"), Some("0"));
    assert!(tables.raw.rows().iter().flatten().all(|cell| !cell.is_empty()));
}

#[tokio::test]
async fn test_filter_sorts_and_reattaches_turnovers() {
    let tables = cache().load(Season::LATEST).await.unwrap();
    let criteria = FilterCriteria::new()
        .with_teams(all_teams())
        .with_position(Position::Center)
        .with_extra_stat(ExtraStat::Turnovers);

    let result = filter(&tables.trimmed, &tables.raw, &criteria).unwrap();

    assert_eq!(
        result.table().column("Player").unwrap(),
        vec!["Bam Adebayo", "Jarrett Allen", "LaMarcus Aldridge", "Steven Adams"]
    );
    assert_eq!(
        result.table().column("TOV").unwrap(),
        vec!["1.5", "1.3", "1.8", "1.7"]
    );
    assert!(!tables.trimmed.has_column("TOV"));
}

#[tokio::test]
async fn test_filter_by_single_team() {
    let tables = cache().load(Season::LATEST).await.unwrap();
    let criteria = FilterCriteria::new()
        .with_teams(["OKC"])
        .with_positions(["C", "PF"]);

    let result = filter(&tables.trimmed, &tables.raw, &criteria).unwrap();

    assert_eq!(result.row_count(), 1);
    assert_eq!(result.table().cell(0, "Player"), Some("Steven Adams"));
    assert_eq!(result.table().cell(0, "PTS"), Some("13.9"));
}

#[tokio::test]
async fn test_empty_team_or_position_selects_nothing() {
    let tables = cache().load(Season::LATEST).await.unwrap();

    let no_teams = FilterCriteria::new().with_positions(["C"]);
    let no_positions = FilterCriteria::new().with_teams(all_teams());

    for criteria in [no_teams, no_positions] {
        let result = filter(&tables.trimmed, &tables.raw, &criteria).unwrap();
        assert!(result.is_empty());
    }
}

#[tokio::test]
async fn test_team_options_come_from_season() {
    let tables = cache().load(Season::LATEST).await.unwrap();
    assert_eq!(tables.team_options().unwrap(), vec!["BRK", "MIA", "OKC", "SAS"]);
}

#[tokio::test]
async fn test_export_round_trips_filtered_selection() {
    let tables = cache().load(Season::LATEST).await.unwrap();
    let criteria = FilterCriteria::new()
        .with_teams(all_teams())
        .with_positions(["C"])
        .with_extra_stat(ExtraStat::GamesStarted);
    let result = filter(&tables.trimmed, &tables.raw, &criteria).unwrap();

    let artifact = encode(result.table()).unwrap();

    assert_eq!(artifact.file_name(), "playerstats.csv");
    assert_eq!(&decode(artifact.csv()).unwrap(), result.table());
    assert_eq!(&decode_data_uri(&artifact.data_uri()).unwrap(), result.table());
    assert!(artifact.csv().starts_with("Player,Pos,Age,Tm,"));
}

#[tokio::test]
async fn test_export_of_raw_table_keeps_every_column() {
    let tables = cache().load(Season::LATEST).await.unwrap();
    let artifact = encode(&tables.raw).unwrap();
    let decoded = decode_data_uri(&artifact.data_uri()).unwrap();

    assert_eq!(decoded.columns(), tables.raw.columns());
    assert_eq!(decoded.len(), FIXTURE_PLAYERS.len());
}

#[test]
fn test_page_without_table_is_data_unavailable() {
    let err = extract_first_table("<html><body><p>Page not found</p></body></html>", "fixture://")
        .unwrap_err();
    assert!(err.is_data_unavailable());
}
