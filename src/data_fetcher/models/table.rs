//! Tabular data model shared by the fetcher, the filter engine and the exporter.

use std::collections::BTreeSet;

use crate::error::AppError;

/// Table exactly as extracted from the source document.
///
/// `None` marks a cell that was missing or empty in the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRows {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawRows {
    pub fn new(header: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { header, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// Immutable table of string cells with named columns.
///
/// Every row holds exactly one cell per column. Transforms never mutate in
/// place; they return a new table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StatsTable {
    /// Builds a table, checking that every row matches the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, AppError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(AppError::malformed_table(format!(
                "row {index} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// A table with the given columns and no rows.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns the values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, AppError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| AppError::column_not_found(name))?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Returns a single cell by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|r| r[index].as_str())
    }

    /// Returns a copy without the named columns.
    ///
    /// Every name must exist; a missing one means the table does not have the
    /// layout the caller expects.
    pub fn without_columns(&self, names: &[&str]) -> Result<StatsTable, AppError> {
        if let Some(missing) = names.iter().find(|name| !self.has_column(name)) {
            return Err(AppError::schema_mismatch(*missing, "statistics table"));
        }

        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();

        Ok(StatsTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Returns a copy with `name` set to `values`.
    ///
    /// An existing column with the same name is replaced in place, otherwise
    /// the column is appended at the end.
    pub fn with_column(
        &self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<StatsTable, AppError> {
        let name = name.into();
        if values.len() != self.rows.len() {
            return Err(AppError::malformed_table(format!(
                "column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }

        let mut columns = self.columns.clone();
        let mut rows = self.rows.clone();
        match self.column_index(&name) {
            Some(index) => {
                for (row, value) in rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                columns.push(name);
                for (row, value) in rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(StatsTable { columns, rows })
    }

    /// Returns the rows at `indices`, in that order. Out-of-range indices are skipped.
    pub fn select_rows(&self, indices: &[usize]) -> StatsTable {
        StatsTable {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// Returns a copy sorted ascending by the named column (stable, lexicographic).
    pub fn sorted_by(&self, name: &str) -> Result<StatsTable, AppError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| AppError::column_not_found(name))?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a[index].cmp(&b[index]));
        Ok(StatsTable {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Sorted distinct values of a column.
    pub fn unique_values(&self, name: &str) -> Result<Vec<String>, AppError> {
        let values: BTreeSet<&str> = self.column(name)?.into_iter().collect();
        Ok(values.into_iter().map(str::to_string).collect())
    }

    /// Returns a copy with the named column moved to the front, for index-style display.
    pub fn with_leading_column(&self, name: &str) -> Result<StatsTable, AppError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| AppError::column_not_found(name))?;
        let order: Vec<usize> = std::iter::once(index)
            .chain((0..self.columns.len()).filter(|&i| i != index))
            .collect();
        Ok(StatsTable {
            columns: order.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| order.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> StatsTable {
        StatsTable::new(
            strings(&["Player", "Tm", "PTS"]),
            vec![
                strings(&["Zach", "LAL", "10.1"]),
                strings(&["Aaron", "BOS", "22.0"]),
                strings(&["Mike", "LAL", "5.5"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = StatsTable::new(strings(&["A", "B"]), vec![strings(&["1"])]);
        assert!(matches!(result, Err(AppError::MalformedTable(_))));
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column("Tm").unwrap(), vec!["LAL", "BOS", "LAL"]);
        assert!(matches!(
            table.column("AST"),
            Err(AppError::ColumnNotFound { .. })
        ));
        assert_eq!(table.cell(1, "PTS"), Some("22.0"));
        assert_eq!(table.cell(9, "PTS"), None);
    }

    #[test]
    fn test_without_columns() {
        let table = sample().without_columns(&["Tm"]).unwrap();
        assert_eq!(table.columns(), &strings(&["Player", "PTS"])[..]);
        assert_eq!(table.rows()[0], strings(&["Zach", "10.1"]));

        let err = sample().without_columns(&["Tm", "GS"]).unwrap_err();
        assert!(matches!(err, AppError::SchemaMismatch { ref column, .. } if column == "GS"));
    }

    #[test]
    fn test_with_column_appends_and_leaves_base_untouched() {
        let base = sample();
        let extended = base
            .with_column("AST", strings(&["1", "2", "3"]))
            .unwrap();

        assert_eq!(extended.columns().last().map(String::as_str), Some("AST"));
        assert_eq!(extended.column("AST").unwrap(), vec!["1", "2", "3"]);
        assert!(!base.has_column("AST"));
    }

    #[test]
    fn test_with_column_replaces_existing() {
        let replaced = sample()
            .with_column("PTS", strings(&["0", "0", "0"]))
            .unwrap();
        assert_eq!(replaced.columns().len(), 3);
        assert_eq!(replaced.column("PTS").unwrap(), vec!["0", "0", "0"]);
    }

    #[test]
    fn test_with_column_length_mismatch() {
        let result = sample().with_column("AST", strings(&["1"]));
        assert!(matches!(result, Err(AppError::MalformedTable(_))));
    }

    #[test]
    fn test_select_and_sort() {
        let table = sample().select_rows(&[2, 0, 7]);
        assert_eq!(table.column("Player").unwrap(), vec!["Mike", "Zach"]);

        let sorted = sample().sorted_by("Player").unwrap();
        assert_eq!(
            sorted.column("Player").unwrap(),
            vec!["Aaron", "Mike", "Zach"]
        );
    }

    #[test]
    fn test_unique_values_sorted() {
        assert_eq!(sample().unique_values("Tm").unwrap(), strings(&["BOS", "LAL"]));
    }

    #[test]
    fn test_with_leading_column() {
        let table = sample().with_leading_column("Tm").unwrap();
        assert_eq!(table.columns(), &strings(&["Tm", "Player", "PTS"])[..]);
        assert_eq!(table.rows()[1], strings(&["BOS", "Aaron", "22.0"]));
    }

    #[test]
    fn test_raw_rows_column_index() {
        let raw = RawRows::new(strings(&["Rk", "Player"]), vec![]);
        assert_eq!(raw.column_index("Player"), Some(1));
        assert_eq!(raw.column_index("Tm"), None);
    }
}
