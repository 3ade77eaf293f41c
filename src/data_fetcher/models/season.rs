use std::fmt;
use std::str::FromStr;

use crate::constants::seasons;
use crate::error::AppError;

/// A single NBA season identified by the year it ends in.
///
/// The season is the unit of fetch granularity and the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    pub const EARLIEST: Season = Season(seasons::EARLIEST);
    pub const LATEST: Season = Season(seasons::LATEST);

    /// Creates a season, rejecting years outside the selectable range.
    pub fn new(year: i64) -> Result<Self, AppError> {
        if (seasons::EARLIEST as i64..=seasons::LATEST as i64).contains(&year) {
            Ok(Season(year as u16))
        } else {
            Err(AppError::InvalidSeason { season: year })
        }
    }

    pub fn year(self) -> u16 {
        self.0
    }

    /// All selectable seasons, newest first.
    pub fn all() -> impl Iterator<Item = Season> {
        (seasons::EARLIEST..=seasons::LATEST).rev().map(Season)
    }
}

impl Default for Season {
    fn default() -> Self {
        Season::LATEST
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::config_error(format!("Invalid season year: '{s}'")))?;
        Season::new(year)
    }
}
