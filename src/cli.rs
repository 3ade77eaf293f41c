use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use nba_player_stats::data_fetcher::{ExtraStat, Position, Season};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which table the CSV export is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportSource {
    /// The filtered selection as displayed
    #[default]
    Filtered,
    /// Every player and column of the season
    Raw,
}

/// True when the invocation only reads or edits the configuration.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_source_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// NBA Player Stats
///
/// Scrapes the per-game player statistics of an NBA season and shows the
/// players of the selected teams and positions, sorted by name.
///
/// Both a team and a position must be selected for any player to show up.
/// Extra stats that are hidden by default (turnovers, attempts, rebounds
/// split, ...) can be added back with --stat.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to show, by the year it ends in (1950-2019)
    #[arg(short = 'y', long = "year", default_value_t = Season::LATEST, help_heading = "Selection")]
    pub year: Season,

    /// Team codes to include, e.g. LAL,BOS. See --list-teams.
    #[arg(short = 't', long = "team", value_delimiter = ',', help_heading = "Selection")]
    pub teams: Vec<String>,

    /// Positions to include: C, PF, SF, PG, SG
    #[arg(short = 'p', long = "position", value_delimiter = ',', help_heading = "Selection")]
    pub positions: Vec<Position>,

    /// Extra stat to add back, by column code (TOV) or label. See --list-stats.
    #[arg(short = 's', long = "stat", value_delimiter = ',', help_heading = "Selection")]
    pub stats: Vec<ExtraStat>,

    /// Fetch the selected season from the statistics source, list its team codes and exit
    #[arg(long = "list-teams", help_heading = "Info")]
    pub list_teams: bool,

    /// List the extra stats and positions that can be selected and exit
    #[arg(long = "list-stats", help_heading = "Info")]
    pub list_stats: bool,

    /// Write playerstats.csv into DIR (current directory if omitted)
    #[arg(
        short = 'e',
        long = "export",
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = ".",
        help_heading = "Export"
    )]
    pub export_dir: Option<PathBuf>,

    /// Table to export
    #[arg(long = "export-source", value_enum, default_value_t = ExportSource::Filtered, help_heading = "Export")]
    pub export_source: ExportSource,

    /// Print an HTML download link carrying the CSV as a data URI
    #[arg(long = "html-link", help_heading = "Export")]
    pub html_link: bool,

    /// Update the statistics site base URL in config
    #[arg(long = "set-source-url", value_name = "URL", help_heading = "Configuration")]
    pub new_source_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
