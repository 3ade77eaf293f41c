use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SOURCE_URL, LOG_FILE_NAME,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the statistics site. Season pages are resolved under it.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for page requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Seconds a loaded season stays cached. Cached for the whole run when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_seconds: Option<u64>,
    /// Number of seasons kept in memory at once.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: default_source_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            cache_ttl_seconds: None,
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used. Environment variables
    /// override file values.
    ///
    /// # Environment Variables
    /// - `NBA_STATS_SOURCE_URL` - Override source URL
    /// - `NBA_STATS_LOG_FILE` - Override log file path
    /// - `NBA_STATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Unreadable file, bad TOML or failed validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// An unparsable timeout is ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source_url) = lookup(env_vars::SOURCE_URL) {
            self.source_url = source_url;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.source_url,
            &self.log_file_path,
            self.http_timeout_seconds,
            self.cache_capacity,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Defaults are in use)");
        }

        let config = Config::load().await?;
        print!("{}", config.render(&config_path));
        Ok(())
    }

    /// Formats the settings as shown by `--list-config`.
    pub fn render(&self, config_path: &str) -> String {
        let rule = "────────────────────────────────────";
        let log_location = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!(
                "{}/{LOG_FILE_NAME}\n(Default location)",
                get_log_dir_path()
            ),
        };
        let cache_ttl = match self.cache_ttl_seconds {
            Some(seconds) => format!("{seconds} seconds"),
            None => "Until exit".to_string(),
        };

        format!(
            "\nCurrent Configuration\n{rule}\nConfig Location:\n{config_path}\n{rule}\n\
             Source URL:\n{}\n{rule}\nHTTP Timeout:\n{} seconds\n{rule}\n\
             Season Cache:\n{} seasons, {cache_ttl}\n{rule}\nLog File Location:\n{log_location}\n",
            self.source_url, self.http_timeout_seconds, self.cache_capacity,
        )
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. A trailing slash on
    /// the source URL is dropped.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            source_url: self.source_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
