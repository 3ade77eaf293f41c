//! Terminal output of query results and selector options

pub mod selectors;
pub mod table_view;

pub use selectors::{print_stat_options, print_team_options, render_stat_options, render_team_options};
pub use table_view::{format_table_lines, print_result, render_result};

use crossterm::style::Color;

/// Regular text
pub(crate) const TEXT_COLOR: Color = Color::AnsiValue(231);
/// Table headers and list titles
pub(crate) const HEADER_COLOR: Color = Color::AnsiValue(51);
/// Fallback and warning messages
pub(crate) const NOTICE_COLOR: Color = Color::AnsiValue(226);
