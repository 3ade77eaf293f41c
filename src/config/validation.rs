use crate::error::AppError;
use std::path::Path;
use url::Url;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Source URL must parse as an absolute http or https URL with a host
/// - HTTP timeout and cache capacity must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    source_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    cache_capacity: usize,
) -> Result<(), AppError> {
    validate_source_url(source_url)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero",
        ));
    }
    if cache_capacity == 0 {
        return Err(AppError::config_error(
            "Cache capacity must be greater than zero",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Checks that `source_url` is something the HTTP client can fetch from.
pub fn validate_source_url(source_url: &str) -> Result<(), AppError> {
    if source_url.trim().is_empty() {
        return Err(AppError::config_error("Source URL cannot be empty"));
    }

    let parsed = Url::parse(source_url).map_err(|e| {
        AppError::config_error(format!("Source URL '{source_url}' is not a valid URL: {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        "http" | "https" => Err(AppError::config_error(format!(
            "Source URL '{source_url}' has no host"
        ))),
        scheme => Err(AppError::config_error(format!(
            "Source URL must use http or https, got '{scheme}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_source_url("https://www.basketball-reference.com").is_ok());
        assert!(validate_source_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_rejects_bad_source_urls() {
        for url in ["", "www.basketball-reference.com", "ftp://example.com", "https://"] {
            assert!(
                matches!(validate_source_url(url), Err(AppError::Config(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_timeout_and_capacity() {
        let url = "https://stats.example.com";
        assert!(validate_config(url, &None, 0, 16).is_err());
        assert!(validate_config(url, &None, 30, 0).is_err());
        assert!(validate_config(url, &None, 30, 16).is_ok());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("stats.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        validate_config("https://stats.example.com", &log_path, 30, 16).unwrap();

        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let result = validate_config("https://stats.example.com", &Some(String::new()), 30, 16);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
