use crate::cli::{Args, ExportSource};
use crossterm::{execute, terminal::SetTitle};
use nba_player_stats::config::Config;
use nba_player_stats::config::validation::validate_source_url;
use nba_player_stats::data_fetcher::{HttpStatsSource, SeasonCache, StatsTable};
use nba_player_stats::error::AppError;
use nba_player_stats::export;
use nba_player_stats::filter::{FilterCriteria, filter};
use nba_player_stats::ui;
use std::io::stdout;
use tracing::{info, warn};

const WINDOW_TITLE: &str = "NBA Player Stats";

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-source-url, --set-log-file, --clear-log-file).
///
/// Starts from the saved configuration, or defaults if it cannot be read,
/// and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|e| {
        warn!("Could not load existing config, starting from defaults: {e}");
        Config::default()
    });

    if let Some(new_url) = &args.new_source_url {
        validate_source_url(new_url)?;
        config.source_url = new_url.trim_end_matches('/').to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --list-stats command.
pub fn handle_list_stats_command() -> Result<(), AppError> {
    ui::print_stat_options()
}

/// Runs a query: loads the season, then lists its teams or shows and exports the selection.
pub async fn handle_query_command(args: &Args, config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;

    let source = HttpStatsSource::from_config(config)?;
    let cache = SeasonCache::from_config(source, config)?;
    let tables = cache.load(args.year).await?;

    if args.list_teams {
        return ui::print_team_options(args.year, &tables.team_options()?);
    }

    let criteria = FilterCriteria::new()
        .with_teams(args.teams.iter().cloned())
        .with_positions(args.positions.iter().map(|p| p.code()));
    let criteria = args
        .stats
        .iter()
        .fold(criteria, |criteria, stat| criteria.with_extra_stat(*stat));

    let result = filter(&tables.trimmed, &tables.raw, &criteria)?;
    info!(
        "Season {} query matched {} players",
        args.year,
        result.row_count()
    );
    ui::print_result(&result, &criteria)?;

    if args.export_dir.is_some() || args.html_link {
        let table: &StatsTable = match args.export_source {
            ExportSource::Filtered => result.table(),
            ExportSource::Raw => &tables.raw,
        };
        let artifact = export::encode(table)?;

        if let Some(dir) = &args.export_dir {
            let path = artifact.write_to_dir(dir).await?;
            println!("Exported {} rows to {}", table.len(), path.display());
        }
        if args.html_link {
            println!("{}", artifact.html_link());
        }
    }

    Ok(())
}
