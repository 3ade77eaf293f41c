//! Rendering of a filtered player table

use crossterm::{
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{Write, stdout};

use super::{HEADER_COLOR, NOTICE_COLOR, TEXT_COLOR};
use crate::constants::columns::PLAYER;
use crate::constants::messages::{NO_MATCHES, NO_SELECTION, PLAYERS_FOUND_PREFIX};
use crate::data_fetcher::models::StatsTable;
use crate::error::AppError;
use crate::filter::{FilterCriteria, FilteredResult};

const COLUMN_GAP: &str = "  ";

/// Lays out `table` as aligned text lines, header first.
///
/// The first column is left-aligned, the others are right-aligned.
pub fn format_table_lines(table: &StatsTable) -> Vec<String> {
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            table
                .rows()
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i == 0 {
                    format!("{cell:<width$}")
                } else {
                    format!("{cell:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    std::iter::once(format_line(table.columns()))
        .chain(table.rows().iter().map(|row| format_line(row.as_slice())))
        .collect()
}

/// Writes the outcome of a query to `out`.
///
/// The player count always comes first. An empty team or position selection
/// shows the no-selection notice, a valid selection without matches shows
/// its own notice, anything else shows the table keyed by player.
pub fn render_result<W: Write>(
    out: &mut W,
    result: &FilteredResult,
    criteria: &FilterCriteria,
) -> Result<(), AppError> {
    execute!(
        out,
        SetForegroundColor(TEXT_COLOR),
        Print(format!("{PLAYERS_FOUND_PREFIX}{}\n", result.row_count())),
        ResetColor
    )?;

    if criteria.is_empty_selection() {
        return render_notice(out, NO_SELECTION);
    }
    if result.is_empty() {
        return render_notice(out, NO_MATCHES);
    }

    let table = result.table().with_leading_column(PLAYER)?;
    let mut lines = format_table_lines(&table).into_iter();
    if let Some(header) = lines.next() {
        execute!(
            out,
            SetForegroundColor(HEADER_COLOR),
            SetAttribute(Attribute::Bold),
            Print(header),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
    }
    for line in lines {
        execute!(
            out,
            SetForegroundColor(TEXT_COLOR),
            Print(line),
            Print("\n")
        )?;
    }
    execute!(out, ResetColor)?;
    Ok(())
}

/// Prints the outcome of a query to stdout.
pub fn print_result(result: &FilteredResult, criteria: &FilterCriteria) -> Result<(), AppError> {
    render_result(&mut stdout(), result, criteria)
}

fn render_notice<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    execute!(
        out,
        SetForegroundColor(NOTICE_COLOR),
        Print(format!("{message}\n")),
        ResetColor
    )?;
    Ok(())
}
