use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from source: {0}")]
    SourceFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Source page not found (404): {url}")]
    SourceNotFound { url: String },

    #[error("Source server error ({status}): {message} (URL: {url})")]
    SourceServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Source client error ({status}): {message} (URL: {url})")]
    SourceClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Source rate limit exceeded (429): {message} (URL: {url})")]
    SourceRateLimit { message: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Source returned no usable data: {message} (URL: {url})")]
    SourceNoData { message: String, url: String },

    #[error("No player rows published for season {season}")]
    SeasonEmpty { season: u16 },

    // Schema errors
    #[error("Expected column '{column}' is missing from {context}")]
    SchemaMismatch { column: String, context: String },

    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    // Export errors
    #[error("Failed to encode export: {0}")]
    Encoding(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Input errors
    #[error("Season {season} is outside the supported range")]
    InvalidSeason { season: i64 },

    #[error("Unknown extra stat: {label}")]
    UnknownStat { label: String },

    #[error("Unknown position: {code}")]
    UnknownPosition { code: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a source not found error
    pub fn source_not_found(url: impl Into<String>) -> Self {
        Self::SourceNotFound { url: url.into() }
    }

    /// Create a source server error (5xx status codes)
    pub fn source_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::SourceServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a source client error (4xx status codes except 404 and 429)
    pub fn source_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::SourceClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a source rate limit error
    pub fn source_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SourceRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a no data error
    pub fn source_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SourceNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a schema mismatch error for a column the source no longer publishes
    pub fn schema_mismatch(column: impl Into<String>, context: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            column: column.into(),
            context: context.into(),
        }
    }

    /// Create a column lookup error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create a malformed table error with context
    pub fn malformed_table(msg: impl Into<String>) -> Self {
        Self::MalformedTable(msg.into())
    }

    /// Create an encoding error with context
    pub fn encoding_error(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Check if the source could not deliver a season table at all
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::SourceFetch(_)
                | AppError::SourceNotFound { .. }
                | AppError::SourceServerError { .. }
                | AppError::SourceClientError { .. }
                | AppError::SourceRateLimit { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::SourceNoData { .. }
                | AppError::SeasonEmpty { .. }
        )
    }

    /// Check if the error indicates a changed source format or a bad column request
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            AppError::SchemaMismatch { .. } | AppError::ColumnNotFound { .. }
        )
    }

    /// Check if the error happened while building an export artifact
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, AppError::Encoding(_) | AppError::Csv(_))
    }

    /// Message shown to the user when an interaction fails.
    ///
    /// Keeps "no data available" apart from "the source changed format" so the
    /// user knows whether trying again later can help.
    pub fn user_message(&self) -> String {
        if self.is_data_unavailable() {
            format!("No data available: {self}")
        } else if self.is_schema_mismatch() {
            format!("The statistics source changed format: {self}")
        } else if self.is_encoding_error() {
            format!("Export failed: {self}")
        } else {
            self.to_string()
        }
    }
}
