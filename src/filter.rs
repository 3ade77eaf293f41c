//! Filter engine: narrows a season's trimmed table to a team/position selection.

use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::constants::columns::{PLAYER, POSITION, TEAM};
use crate::data_fetcher::models::{ExtraStat, Position, StatsTable};
use crate::error::AppError;

/// What the user selected.
///
/// An empty team or position set selects nothing, never everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub teams: BTreeSet<String>,
    pub positions: BTreeSet<String>,
    /// Raw-table columns to re-attach, in display order
    pub extra_columns: Vec<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams<I, T>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.teams.extend(teams.into_iter().map(Into::into));
        self
    }

    pub fn with_positions<I, T>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.positions.extend(positions.into_iter().map(Into::into));
        self
    }

    pub fn with_position(self, position: Position) -> Self {
        self.with_positions([position.code()])
    }

    /// Requests an extra stat by its selector entry.
    pub fn with_extra_stat(self, stat: ExtraStat) -> Self {
        self.with_extra_column(stat.column())
    }

    /// Requests a raw-table column by name. Duplicates are ignored.
    pub fn with_extra_column(mut self, column: impl Into<String>) -> Self {
        let column = column.into();
        if !self.extra_columns.contains(&column) {
            self.extra_columns.push(column);
        }
        self
    }

    /// True when teams or positions is empty, so nothing can match.
    pub fn is_empty_selection(&self) -> bool {
        self.teams.is_empty() || self.positions.is_empty()
    }
}

/// Result of applying [`FilterCriteria`] to a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredResult {
    table: StatsTable,
}

impl FilteredResult {
    pub fn table(&self) -> &StatsTable {
        &self.table
    }

    pub fn into_table(self) -> StatsTable {
        self.table
    }

    /// Number of players found.
    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Applies `criteria` to a season's tables.
///
/// Rows of `trimmed` whose team and position are both selected are kept
/// (exact, case-sensitive match). Each extra column is copied from `raw` at
/// the same row position, so `raw` and `trimmed` must be row-aligned. The
/// result is sorted by player name.
///
/// # Errors
/// * `AppError::ColumnNotFound` - An extra column does not exist in `raw`
#[instrument(skip(trimmed, raw), fields(rows = trimmed.len()))]
pub fn filter(
    trimmed: &StatsTable,
    raw: &StatsTable,
    criteria: &FilterCriteria,
) -> Result<FilteredResult, AppError> {
    let extras: Vec<(String, Vec<&str>)> = criteria
        .extra_columns
        .iter()
        .map(|name| raw.column(name).map(|values| (name.clone(), values)))
        .collect::<Result<_, AppError>>()?;

    if raw.len() != trimmed.len() {
        return Err(AppError::malformed_table(format!(
            "raw table has {} rows but trimmed table has {}",
            raw.len(),
            trimmed.len()
        )));
    }

    let matching: Vec<usize> = if criteria.is_empty_selection() {
        debug!("Empty team or position selection, no rows selected");
        Vec::new()
    } else {
        let teams = trimmed.column(TEAM)?;
        let positions = trimmed.column(POSITION)?;
        (0..trimmed.len())
            .filter(|&i| {
                criteria.teams.contains(teams[i]) && criteria.positions.contains(positions[i])
            })
            .collect()
    };

    let mut table = trimmed.select_rows(&matching);
    for (name, values) in extras {
        let aligned = matching.iter().map(|&i| values[i].to_string()).collect();
        table = table.with_column(name, aligned)?;
    }
    let table = table.sorted_by(PLAYER)?;

    debug!(
        "Filter matched {} of {} rows with {} extra columns",
        table.len(),
        trimmed.len(),
        criteria.extra_columns.len()
    );
    Ok(FilteredResult { table })
}

/// Sorted distinct team codes, for the team selector.
///
/// # Errors
/// * `AppError::ColumnNotFound` - The table has no `Tm` column
pub fn team_options(trimmed: &StatsTable) -> Result<Vec<String>, AppError> {
    trimmed.unique_values(TEAM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn two_player_tables() -> (StatsTable, StatsTable) {
        let raw = TestDataBuilder::table(
            &["Player", "Pos", "Tm", "PTS", "TOV"],
            &[&["A", "PG", "LAL", "20.1", "3.1"], &["B", "C", "BOS", "12.0", "1.4"]],
        );
        let trimmed = raw.without_columns(&["TOV"]).unwrap();
        (trimmed, raw)
    }

    #[test]
    fn test_filter_selects_matching_row() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new().with_teams(["LAL"]).with_positions(["PG"]);

        let result = filter(&trimmed, &raw, &criteria).unwrap();

        assert_eq!(result.row_count(), 1);
        assert_eq!(result.table().column("Player").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_empty_teams_selects_nothing() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new().with_positions(["PG", "C"]);

        let result = filter(&trimmed, &raw, &criteria).unwrap();

        assert!(criteria.is_empty_selection());
        assert!(result.is_empty());
        assert_eq!(result.table().columns(), trimmed.columns());
    }

    #[test]
    fn test_empty_positions_selects_nothing() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new().with_teams(["LAL", "BOS"]);

        assert_eq!(filter(&trimmed, &raw, &criteria).unwrap().row_count(), 0);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new().with_teams(["lal"]).with_positions(["PG"]);

        assert!(filter(&trimmed, &raw, &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_results_sorted_by_player() {
        let raw = TestDataBuilder::table(
            &["Player", "Pos", "Tm", "PTS"],
            &[
                &["Zion", "PF", "NOP", "22.0"],
                &["Marcus", "PG", "NOP", "9.0"],
                &["Anthony", "C", "NOP", "25.9"],
            ],
        );
        let criteria = FilterCriteria::new()
            .with_teams(["NOP"])
            .with_positions(["PF", "PG", "C"]);

        let result = filter(&raw, &raw, &criteria).unwrap();

        assert_eq!(
            result.table().column("Player").unwrap(),
            vec!["Anthony", "Marcus", "Zion"]
        );
    }

    #[test]
    fn test_extra_column_attached_by_row() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new()
            .with_teams(["LAL", "BOS"])
            .with_positions(["PG", "C"])
            .with_extra_stat(ExtraStat::Turnovers);

        let result = filter(&trimmed, &raw, &criteria).unwrap();

        assert_eq!(result.table().columns().last().map(String::as_str), Some("TOV"));
        assert_eq!(result.table().cell(0, "Player"), Some("A"));
        assert_eq!(result.table().cell(0, "TOV"), Some("3.1"));
        assert_eq!(result.table().cell(1, "TOV"), Some("1.4"));
        assert!(!trimmed.has_column("TOV"));
    }

    #[test]
    fn test_unknown_extra_column_fails() {
        let (trimmed, raw) = two_player_tables();
        let criteria = FilterCriteria::new()
            .with_teams(["LAL"])
            .with_positions(["PG"])
            .with_extra_column("BLK%");

        let err = filter(&trimmed, &raw, &criteria).unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound { ref column } if column == "BLK%"));
    }

    #[test]
    fn test_duplicate_extra_columns_ignored() {
        let criteria = FilterCriteria::new()
            .with_extra_stat(ExtraStat::Turnovers)
            .with_extra_column("TOV");
        assert_eq!(criteria.extra_columns, vec!["TOV".to_string()]);
    }

    #[test]
    fn test_team_options_sorted_unique() {
        let (trimmed, _) = two_player_tables();
        assert_eq!(team_options(&trimmed).unwrap(), vec!["BOS", "LAL"]);
    }

    #[test]
    fn test_team_options_without_team_column() {
        let table = TestDataBuilder::table(&["Player", "Pos"], &[&["Steven Adams", "C"]]);
        let err = team_options(&table).unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound { ref column } if column == "Tm"));
    }
}
