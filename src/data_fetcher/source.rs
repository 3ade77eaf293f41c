//! Pluggable season data sources

use reqwest::Client;
use std::future::Future;
use tracing::instrument;

use crate::config::Config;
use crate::data_fetcher::api::{build_season_url, create_http_client_with_timeout, fetch_html};
use crate::data_fetcher::models::{RawRows, Season};
use crate::data_fetcher::processors::extract_first_table;
use crate::error::AppError;

/// Anything that can deliver the published statistics table for a season.
///
/// The season cache is generic over this trait so the remote site can be
/// swapped for a fixture in tests or for another source format.
pub trait StatsSource: Send + Sync {
    /// Fetches the season table as published, header rows and gaps included.
    fn fetch_season(
        &self,
        season: Season,
    ) -> impl Future<Output = Result<RawRows, AppError>> + Send;
}

/// Scrapes the per-game statistics page of the configured site.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: Client,
    source_url: String,
}

impl HttpStatsSource {
    pub fn new(client: Client, source_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
        }
    }

    /// Builds a source from configuration, honoring the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.source_url.clone()))
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl StatsSource for HttpStatsSource {
    #[instrument(skip(self), fields(season = %season))]
    async fn fetch_season(&self, season: Season) -> Result<RawRows, AppError> {
        let url = build_season_url(&self.source_url, season);
        let html = fetch_html(&self.client, &url).await?;
        extract_first_table(&html, &url)
    }
}
