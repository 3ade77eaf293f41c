//! Fixed selector vocabularies: extra stat labels and player positions.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Raw-table columns a user can opt back into displaying.
///
/// Each variant carries its human-readable label and the column it maps to,
/// so no label parsing is needed to find the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraStat {
    GamesStarted,
    Turnovers,
    EffectiveFieldGoalPercentage,
    TwoPointAttempts,
    ThreePointAttempts,
    FreeThrowAttempts,
    FieldGoalAttempts,
    OffensiveRebounds,
    DefensiveRebounds,
}

impl ExtraStat {
    /// All extra stats in selector order.
    pub const ALL: [ExtraStat; 9] = [
        ExtraStat::GamesStarted,
        ExtraStat::Turnovers,
        ExtraStat::EffectiveFieldGoalPercentage,
        ExtraStat::TwoPointAttempts,
        ExtraStat::ThreePointAttempts,
        ExtraStat::FreeThrowAttempts,
        ExtraStat::FieldGoalAttempts,
        ExtraStat::OffensiveRebounds,
        ExtraStat::DefensiveRebounds,
    ];

    /// Display label shown in the stat selector.
    pub fn label(self) -> &'static str {
        match self {
            ExtraStat::GamesStarted => "Games Started(GS)",
            ExtraStat::Turnovers => "Turnover Percentage(TOV)",
            ExtraStat::EffectiveFieldGoalPercentage => "Effective Field Goal Percentage(eFG%)",
            ExtraStat::TwoPointAttempts => "2-Point Attempts(2PA)",
            ExtraStat::ThreePointAttempts => "3-Point Attempts(3PA)",
            ExtraStat::FreeThrowAttempts => "Free Throw Attempts (FTA)",
            ExtraStat::FieldGoalAttempts => "Field Goal Attempts (FGA)",
            ExtraStat::OffensiveRebounds => "Offensive Rebounds (ORB)",
            ExtraStat::DefensiveRebounds => "Defensive Rebounds (DRB)",
        }
    }

    /// Raw-table column the stat is read from.
    pub fn column(self) -> &'static str {
        match self {
            ExtraStat::GamesStarted => "GS",
            ExtraStat::Turnovers => "TOV",
            ExtraStat::EffectiveFieldGoalPercentage => "eFG%",
            ExtraStat::TwoPointAttempts => "2PA",
            ExtraStat::ThreePointAttempts => "3PA",
            ExtraStat::FreeThrowAttempts => "FTA",
            ExtraStat::FieldGoalAttempts => "FGA",
            ExtraStat::OffensiveRebounds => "ORB",
            ExtraStat::DefensiveRebounds => "DRB",
        }
    }

    /// Looks a stat up by its exact display label.
    pub fn from_label(label: &str) -> Option<ExtraStat> {
        Self::ALL.into_iter().find(|stat| stat.label() == label)
    }

    /// Looks a stat up by its column code, ignoring ASCII case.
    pub fn from_column(column: &str) -> Option<ExtraStat> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.column().eq_ignore_ascii_case(column))
    }
}

impl fmt::Display for ExtraStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExtraStat {
    type Err = AppError;

    /// Accepts either the column code (`TOV`) or the full label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ExtraStat::from_column(s)
            .or_else(|| ExtraStat::from_label(s))
            .ok_or_else(|| AppError::UnknownStat {
                label: s.to_string(),
            })
    }
}

/// Player positions offered by the position selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Center,
    PowerForward,
    SmallForward,
    PointGuard,
    ShootingGuard,
}

impl Position {
    /// All positions in selector order.
    pub const ALL: [Position; 5] = [
        Position::Center,
        Position::PowerForward,
        Position::SmallForward,
        Position::PointGuard,
        Position::ShootingGuard,
    ];

    /// Position code as published in the `Pos` column.
    pub fn code(self) -> &'static str {
        match self {
            Position::Center => "C",
            Position::PowerForward => "PF",
            Position::SmallForward => "SF",
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|pos| pos.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::UnknownPosition {
                code: s.to_string(),
            })
    }
}
