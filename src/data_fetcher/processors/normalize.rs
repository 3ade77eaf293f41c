//! Cleaning and reshaping of a fetched season table

use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::constants::columns::{AGE, EXCLUDED, MISSING_VALUE, REQUIRED};
use crate::data_fetcher::models::{RawRows, Season, SeasonTables, StatsTable};
use crate::error::AppError;

/// Turns the rows fetched for a season into the raw and trimmed tables.
///
/// - every column the pipeline depends on must be present
/// - rows whose `Age` cell is literally `"Age"` are repeated headers and are dropped
/// - missing cells become `"0"`
/// - the trimmed table is the raw table minus the excluded columns
///
/// Both tables keep the same rows in the same order.
///
/// # Errors
/// * `AppError::SchemaMismatch` - A required or excluded column is absent
/// * `AppError::SeasonEmpty` - Nothing is left once header rows are removed
#[instrument(skip(rows), fields(season = %season))]
pub fn normalize(season: Season, rows: RawRows) -> Result<SeasonTables, AppError> {
    let context = format!("season {season} table");
    if let Some(missing) = REQUIRED
        .iter()
        .chain(EXCLUDED.iter())
        .find(|name| rows.column_index(name).is_none())
    {
        return Err(AppError::schema_mismatch(*missing, context));
    }

    let age_index = rows
        .column_index(AGE)
        .ok_or_else(|| AppError::schema_mismatch(AGE, "season table"))?;
    let width = rows.header.len();
    let total_rows = rows.rows.len();
    let mut filled_cells = 0usize;

    let cleaned: Vec<Vec<String>> = rows
        .rows
        .into_iter()
        .filter(|row| row.get(age_index).and_then(|c| c.as_deref()) != Some(AGE))
        .map(|mut row| {
            row.resize(width, None);
            row.into_iter()
                .map(|cell| match cell {
                    Some(value) if !value.trim().is_empty() => value,
                    _ => {
                        filled_cells += 1;
                        MISSING_VALUE.to_string()
                    }
                })
                .collect()
        })
        .collect();

    let header_rows = total_rows - cleaned.len();
    debug!(
        "Dropped {} repeated header rows and filled {} missing cells",
        header_rows, filled_cells
    );

    if cleaned.is_empty() {
        return Err(AppError::SeasonEmpty {
            season: season.year(),
        });
    }

    let raw = StatsTable::new(rows.header, cleaned)?;
    let trimmed = raw.without_columns(&EXCLUDED)?;

    info!(
        "Normalized season {}: players={}, raw_columns={}, trimmed_columns={}",
        season,
        raw.len(),
        raw.columns().len(),
        trimmed.columns().len()
    );

    Ok(SeasonTables {
        season,
        trimmed,
        raw,
        fetched_at: Instant::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_normalize_drops_header_rows_and_excluded_columns() {
        let rows = TestDataBuilder::raw_rows_with_repeated_header();
        let tables = normalize(Season::LATEST, rows).unwrap();

        assert_eq!(tables.raw.len(), 3);
        assert_eq!(tables.trimmed.len(), tables.raw.len());
        assert!(tables.raw.column("Age").unwrap().iter().all(|age| *age != "Age"));

        for excluded in EXCLUDED {
            assert!(tables.raw.has_column(excluded));
            assert!(!tables.trimmed.has_column(excluded));
        }
        let expected: Vec<&String> = tables
            .raw
            .columns()
            .iter()
            .filter(|c| !EXCLUDED.contains(&c.as_str()))
            .collect();
        let actual: Vec<&String> = tables.trimmed.columns().iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_normalize_keeps_rows_aligned() {
        let rows = TestDataBuilder::raw_rows_with_repeated_header();
        let tables = normalize(Season::LATEST, rows).unwrap();

        assert_eq!(
            tables.raw.column("Player").unwrap(),
            tables.trimmed.column("Player").unwrap()
        );
    }

    #[test]
    fn test_normalize_fills_missing_values_with_zero() {
        let mut rows = TestDataBuilder::raw_rows_with_repeated_header();
        let fg_pct = rows.column_index("FG%").unwrap();
        let pts = rows.column_index("PTS").unwrap();
        rows.rows[0][fg_pct] = None;
        rows.rows[0][pts] = Some("  ".to_string());
        rows.rows[2].truncate(3);

        let tables = normalize(Season::LATEST, rows).unwrap();

        assert_eq!(tables.raw.cell(0, "FG%"), Some("0"));
        assert_eq!(tables.trimmed.cell(0, "PTS"), Some("0"));
        // Source row 1 is a repeated header, so source row 2 ends up at index 1
        assert_eq!(tables.raw.cell(1, "PTS"), Some("0"));
    }

    #[test]
    fn test_normalize_missing_team_column_is_schema_mismatch() {
        let mut rows = TestDataBuilder::raw_rows_with_repeated_header();
        let tm = rows.column_index("Tm").unwrap();
        rows.header[tm] = "Team".to_string();

        let err = normalize(Season::LATEST, rows).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch { ref column, .. } if column == "Tm"));
    }

    #[test]
    fn test_normalize_missing_excluded_column_is_schema_mismatch() {
        let mut rows = TestDataBuilder::raw_rows_with_repeated_header();
        let gs = rows.column_index("GS").unwrap();
        rows.header[gs] = "Starts".to_string();

        let err = normalize(Season::LATEST, rows).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_normalize_only_header_rows_is_empty_season() {
        let mut rows = TestDataBuilder::raw_rows_with_repeated_header();
        let age = rows.column_index("Age").unwrap();
        rows.rows.retain(|row| row[age].as_deref() == Some("Age"));

        let err = normalize(Season::new(1950).unwrap(), rows).unwrap_err();
        assert!(matches!(err, AppError::SeasonEmpty { season: 1950 }));
        assert!(err.is_data_unavailable());
    }
}
