use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::data_fetcher::models::{RawRows, Season, StatsTable};
use crate::data_fetcher::source::StatsSource;
use crate::error::AppError;

/// Column layout of the published per-game table
pub const PER_GAME_HEADER: [&str; 30] = [
    "Rk", "Player", "Pos", "Age", "Tm", "G", "GS", "MP", "FG", "FGA", "FG%", "3P", "3PA", "3P%",
    "2P", "2PA", "2P%", "eFG%", "FT", "FTA", "FT%", "ORB", "DRB", "TRB", "AST", "STL", "BLK",
    "TOV", "PF", "PTS",
];

/// One player line of the fixture season
#[derive(Debug, Clone, Copy)]
pub struct FixturePlayer {
    pub rank: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub age: &'static str,
    pub team: &'static str,
    pub points: &'static str,
    pub turnovers: &'static str,
}

/// Fixture season, deliberately out of name order
pub const FIXTURE_PLAYERS: [FixturePlayer; 4] = [
    FixturePlayer {
        rank: "1",
        name: "Steven Adams",
        position: "C",
        age: "25",
        team: "OKC",
        points: "13.9",
        turnovers: "1.7",
    },
    FixturePlayer {
        rank: "2",
        name: "Bam Adebayo",
        position: "C",
        age: "21",
        team: "MIA",
        points: "8.9",
        turnovers: "1.5",
    },
    FixturePlayer {
        rank: "3",
        name: "LaMarcus Aldridge",
        position: "C",
        age: "33",
        team: "SAS",
        points: "21.3",
        turnovers: "1.8",
    },
    FixturePlayer {
        rank: "4",
        name: "Jarrett Allen",
        position: "C",
        age: "20",
        team: "BRK",
        points: "10.9",
        turnovers: "1.3",
    },
];

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a table from string literals
    pub fn table<'a, R: AsRef<[&'a str]>>(columns: &[&str], rows: &[R]) -> StatsTable {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|c| c.to_string()).collect())
            .collect();
        StatsTable::new(columns, rows).expect("fixture rows must match the column count")
    }

    /// Creates one per-game row for `player`, with plausible values elsewhere
    pub fn player_cells(player: &FixturePlayer) -> Vec<String> {
        PER_GAME_HEADER
            .iter()
            .map(|column| {
                match *column {
                    "Rk" => player.rank,
                    "Player" => player.name,
                    "Pos" => player.position,
                    "Age" => player.age,
                    "Tm" => player.team,
                    "PTS" => player.points,
                    "TOV" => player.turnovers,
                    "G" | "GS" => "80",
                    "MP" => "27.5",
                    c if c.ends_with('%') => ".512",
                    _ => "2.0",
                }
                .to_string()
            })
            .collect()
    }

    /// Creates the rows a season page yields: three players with a repeated
    /// header line between the first and the second
    pub fn raw_rows_with_repeated_header() -> RawRows {
        let header = PER_GAME_HEADER.iter().map(|c| c.to_string()).collect();
        let repeated_header = PER_GAME_HEADER.iter().map(|c| Some(c.to_string())).collect();
        let player_row = |player: &FixturePlayer| {
            Self::player_cells(player)
                .into_iter()
                .map(Some)
                .collect::<Vec<_>>()
        };

        RawRows::new(
            header,
            vec![
                player_row(&FIXTURE_PLAYERS[0]),
                repeated_header,
                player_row(&FIXTURE_PLAYERS[1]),
                player_row(&FIXTURE_PLAYERS[2]),
            ],
        )
    }

    /// Creates a season page holding all fixture players, with a repeated
    /// header row and one empty cell
    pub fn season_page_html() -> String {
        let header_cells: String = PER_GAME_HEADER
            .iter()
            .map(|c| format!("<th>{c}</th>"))
            .collect();
        let header_row = format!("<tr class=\"thead\">{header_cells}</tr>");

        let mut body = String::new();
        for (i, player) in FIXTURE_PLAYERS.iter().enumerate() {
            if i == 2 {
                body.push_str(&header_row);
            }
            let cells: String = Self::player_cells(player)
                .iter()
                .zip(PER_GAME_HEADER)
                .map(|(value, column)| {
                    // Players without a made three have no 3P% on the page
                    if column == "3P%" && i == 1 {
                        "<td></td>".to_string()
                    } else {
                        format!("<td>{value}</td>")
                    }
                })
                .collect();
            body.push_str(&format!("<tr>{cells}</tr>"));
        }

        format!(
            "<html><body><h1>2018-19 NBA Player Stats: Per Game</h1>\
             <table id=\"per_game_stats\"><thead>{header_row}</thead>\
             <tbody>{body}</tbody></table></body></html>"
        )
    }
}

/// In-memory [`StatsSource`] that counts how often it is asked for data.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    fetches: AtomicUsize,
    delay: Option<Duration>,
    fail: bool,
    failing_season: Option<Season>,
}

impl ScriptedSource {
    /// Source that serves the fixture rows for every season
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose every fetch fails as if the site were down
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Holds every fetch for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fails fetches of `season` only
    pub fn with_failing_season(mut self, season: Season) -> Self {
        self.failing_season = Some(season);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl StatsSource for ScriptedSource {
    async fn fetch_season(&self, season: Season) -> Result<RawRows, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail || self.failing_season == Some(season) {
            return Err(AppError::network_connection(
                format!("scripted://{season}"),
                "connection refused",
            ));
        }
        Ok(TestDataBuilder::raw_rows_with_repeated_header())
    }
}
