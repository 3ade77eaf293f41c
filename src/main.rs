// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_list_stats_command,
    handle_query_command,
};
use nba_player_stats::config::Config;
use nba_player_stats::error::AppError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Config errors are only fatal once the config is actually needed
    let config = Config::load().await;
    let config_log_path = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_file_path.clone());

    let (log_file_path, _guard) =
        logging::setup_logging(&args, config_log_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    dispatch(&args, config)
        .await
        .inspect_err(|e| tracing::error!("{e}"))
}

async fn dispatch(args: &Args, config: Result<Config, AppError>) -> Result<(), AppError> {
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(args) {
        return handle_config_update_command(args).await;
    }

    if args.list_stats {
        return handle_list_stats_command();
    }

    handle_query_command(args, &config?).await
}
