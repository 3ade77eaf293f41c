//! CSV export of a statistics table as a base64 data URI download.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::constants::export::{DATA_URI_PREFIX, FILE_NAME, LINK_TEXT};
use crate::data_fetcher::models::StatsTable;
use crate::error::AppError;

/// A table serialized for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    file_name: String,
    csv: String,
    base64: String,
}

impl ExportArtifact {
    /// Always `playerstats.csv`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn csv(&self) -> &str {
        &self.csv
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    /// `data:file/csv;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("{DATA_URI_PREFIX}{}", self.base64)
    }

    /// Anchor element offering the artifact for download under its file name.
    pub fn html_link(&self) -> String {
        format!(
            "<a href=\"{}\" download=\"{}\">{LINK_TEXT}</a>",
            self.data_uri(),
            self.file_name
        )
    }

    /// Writes the CSV into `dir` under the artifact's file name.
    ///
    /// The directory is created if needed. Returns the written path.
    pub async fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, self.csv.as_bytes()).await?;
        info!("Wrote {} bytes to {}", self.csv.len(), path.display());
        Ok(path)
    }
}

/// Serializes `table` to CSV (header first, no index column) and wraps it
/// for download.
///
/// # Errors
/// * `AppError::Csv` - The CSV writer rejected a record
/// * `AppError::Encoding` - The writer could not be flushed or produced invalid UTF-8
#[instrument(skip(table), fields(rows = table.len(), columns = table.columns().len()))]
pub fn encode(table: &StatsTable) -> Result<ExportArtifact, AppError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| AppError::encoding_error(format!("failed to flush CSV writer: {e}")))?;
    let csv = String::from_utf8(data)
        .map_err(|e| AppError::encoding_error(format!("CSV output is not valid UTF-8: {e}")))?;
    let base64 = BASE64.encode(csv.as_bytes());

    debug!("Encoded {} CSV bytes into {} base64 bytes", csv.len(), base64.len());
    Ok(ExportArtifact {
        file_name: FILE_NAME.to_string(),
        csv,
        base64,
    })
}

/// Parses CSV text produced by [`encode`] back into a table.
pub fn decode(csv: &str) -> Result<StatsTable, AppError> {
    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;
    StatsTable::new(columns, rows)
}

/// Decodes a `data:file/csv;base64,` URI back into a table.
///
/// # Errors
/// * `AppError::Encoding` - Wrong prefix, bad base64 or non UTF-8 payload
pub fn decode_data_uri(uri: &str) -> Result<StatsTable, AppError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| AppError::encoding_error("data URI does not carry a base64 CSV payload"))?;
    let bytes = BASE64
        .decode(payload.as_bytes())
        .map_err(|e| AppError::encoding_error(format!("base64 decode failed: {e}")))?;
    let csv = String::from_utf8(bytes)
        .map_err(|e| AppError::encoding_error(format!("payload is not valid UTF-8: {e}")))?;
    decode(&csv)
}
