//! HTTP page fetching with status-aware error handling

use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body as text.
///
/// A failed request is terminal for the interaction: there is no retry, the
/// caller decides whether to ask again.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch
///
/// # Returns
/// * `Result<String, AppError>` - Response body or a typed source error
#[instrument(skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::SourceFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), url);
        return Err(status_error(status, url));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::SourceFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", body.len());
    if body.trim().is_empty() {
        return Err(AppError::source_no_data("Response body is empty", url));
    }
    Ok(body)
}

/// Maps a non-success status code to the matching source error.
fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    match status_code {
        404 => AppError::source_not_found(url),
        429 => AppError::source_rate_limit(reason, url),
        400..=499 => AppError::source_client_error(status_code, reason, url),
        _ => AppError::source_server_error(status_code, reason, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://stats.example.com/leagues/NBA_2019_per_game.html";

    #[test]
    fn test_status_error_not_found() {
        let err = status_error(StatusCode::NOT_FOUND, URL);
        assert!(matches!(err, AppError::SourceNotFound { .. }));
    }

    #[test]
    fn test_status_error_rate_limit() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, URL);
        assert!(matches!(err, AppError::SourceRateLimit { .. }));
    }

    #[test]
    fn test_status_error_client_and_server() {
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, URL),
            AppError::SourceClientError { status: 403, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, URL),
            AppError::SourceServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_every_status_error_is_data_unavailable() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert!(status_error(status, URL).is_data_unavailable());
        }
    }

    mod with_server {
        use super::*;
        use crate::data_fetcher::api::create_http_client_with_timeout;
        use wiremock::{
            Mock, MockServer, ResponseTemplate,
            matchers::{method, path},
        };

        const PAGE_PATH: &str = "/leagues/NBA_2019_per_game.html";

        async fn server_responding(response: ResponseTemplate) -> MockServer {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(PAGE_PATH))
                .respond_with(response)
                .mount(&mock_server)
                .await;
            mock_server
        }

        async fn fetch_from(mock_server: &MockServer) -> Result<String, AppError> {
            let client = create_http_client_with_timeout(5).unwrap();
            fetch_html(&client, &format!("{}{PAGE_PATH}", mock_server.uri())).await
        }

        #[tokio::test]
        async fn test_fetch_html_success() {
            let mock_server =
                server_responding(ResponseTemplate::new(200).set_body_string("<table></table>"))
                    .await;

            assert_eq!(fetch_from(&mock_server).await.unwrap(), "<table></table>");
        }

        #[tokio::test]
        async fn test_fetch_html_not_found() {
            let mock_server = server_responding(ResponseTemplate::new(404)).await;

            let err = fetch_from(&mock_server).await.unwrap_err();
            assert!(matches!(err, AppError::SourceNotFound { ref url } if url.ends_with(PAGE_PATH)));
        }

        #[tokio::test]
        async fn test_fetch_html_rate_limited() {
            let mock_server = server_responding(ResponseTemplate::new(429)).await;

            let err = fetch_from(&mock_server).await.unwrap_err();
            assert!(matches!(err, AppError::SourceRateLimit { .. }));
            assert!(err.is_data_unavailable());
        }

        #[tokio::test]
        async fn test_fetch_html_server_error() {
            let mock_server = server_responding(ResponseTemplate::new(503)).await;

            let err = fetch_from(&mock_server).await.unwrap_err();
            assert!(matches!(err, AppError::SourceServerError { status: 503, .. }));
        }

        #[tokio::test]
        async fn test_fetch_html_blank_body() {
            let mock_server =
                server_responding(ResponseTemplate::new(200).set_body_string("  \n ")).await;

            let err = fetch_from(&mock_server).await.unwrap_err();
            assert!(matches!(err, AppError::SourceNoData { .. }));
        }
    }
}
