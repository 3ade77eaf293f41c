//! Extraction of the first HTML table in a document into raw rows

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::data_fetcher::models::RawRows;
use crate::error::AppError;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("Invalid CSS selector for tables"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Invalid CSS selector for table rows"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("Invalid CSS selector for table cells"));

/// Extracts the first `<table>` of an HTML document.
///
/// The first row becomes the header. Every later row is data, whether its
/// cells are `<th>` or `<td>`, so header rows repeated inside the body are
/// kept for the normalizer to drop. Rows are padded with `None` or truncated
/// to the header width, and empty cells are `None`.
///
/// # Arguments
/// * `html` - The full HTML document
/// * `url` - Where the document came from, used for error context
///
/// # Errors
/// * `AppError::SourceNoData` - No table, an empty header, or no data rows
#[instrument(skip(html), fields(html_len = html.len()))]
pub fn extract_first_table(html: &str, url: &str) -> Result<RawRows, AppError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| AppError::source_no_data("Document contains no table", url))?;

    let mut rows = table.select(&ROW_SELECTOR);
    let header: Vec<String> = rows
        .next()
        .map(|row| row.select(&CELL_SELECTOR).map(cell_text).collect())
        .unwrap_or_default();
    if header.is_empty() || header.iter().all(String::is_empty) {
        return Err(AppError::source_no_data("Table has no header row", url));
    }

    let width = header.len();
    let data: Vec<Vec<Option<String>>> = rows
        .map(|row| {
            let mut cells: Vec<Option<String>> = row
                .select(&CELL_SELECTOR)
                .map(cell_text)
                .map(|text| (!text.is_empty()).then_some(text))
                .collect();
            cells.resize(width, None);
            cells
        })
        .collect();

    if data.is_empty() {
        return Err(AppError::source_no_data("Table has no data rows", url));
    }

    debug!(
        "Extracted table: columns={}, rows={} from {}",
        width,
        data.len(),
        url
    );
    Ok(RawRows::new(header, data))
}

/// Visible text of a cell with whitespace collapsed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
