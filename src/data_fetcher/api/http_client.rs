//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Creates an HTTP client with connection pooling and a request timeout.
///
/// The timeout bounds the whole request, so a stalled source surfaces as
/// `AppError::NetworkTimeout` instead of hanging the interaction.
///
/// # Arguments
/// * `timeout_seconds` - Request timeout (default: 30 seconds, configurable via config/env)
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT)
        .build()
}
