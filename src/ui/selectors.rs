//! Listings of the values each selector accepts

use crossterm::{
    execute,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::io::{Write, stdout};

use super::{HEADER_COLOR, TEXT_COLOR};
use crate::data_fetcher::models::{ExtraStat, Position, Season};
use crate::error::AppError;

/// Writes the team codes of `season`, one per line.
pub fn render_team_options<W: Write>(
    out: &mut W,
    season: Season,
    teams: &[String],
) -> Result<(), AppError> {
    execute!(
        out,
        SetForegroundColor(HEADER_COLOR),
        Print(format!("Teams in {season} ({})\n", teams.len())),
        SetForegroundColor(TEXT_COLOR)
    )?;
    for team in teams {
        execute!(out, Print(format!("  {team}\n")))?;
    }
    execute!(out, ResetColor)?;
    Ok(())
}

/// Writes the extra stats with the code accepted by `--stat`, then the positions.
pub fn render_stat_options<W: Write>(out: &mut W) -> Result<(), AppError> {
    let code_width = ExtraStat::ALL
        .iter()
        .map(|stat| stat.column().len())
        .max()
        .unwrap_or(0);

    execute!(
        out,
        SetForegroundColor(HEADER_COLOR),
        Print("Additional Stats\n"),
        SetForegroundColor(TEXT_COLOR)
    )?;
    for stat in ExtraStat::ALL {
        execute!(
            out,
            Print(format!("  {:<code_width$}  {}\n", stat.column(), stat.label()))
        )?;
    }

    let positions: Vec<&str> = Position::ALL.iter().map(|p| p.code()).collect();
    execute!(
        out,
        SetForegroundColor(HEADER_COLOR),
        Print("Positions\n"),
        SetForegroundColor(TEXT_COLOR),
        Print(format!("  {}\n", positions.join(", "))),
        ResetColor
    )?;
    Ok(())
}

pub fn print_team_options(season: Season, teams: &[String]) -> Result<(), AppError> {
    render_team_options(&mut stdout(), season, teams)
}

pub fn print_stat_options() -> Result<(), AppError> {
    render_stat_options(&mut stdout())
}
