//! CSV sheets.
//!
//! The first non-blank record is the header row. Cell text is kept as
//! written so length rules see the real value; only headers are cleaned.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use sheetcheck_model::SheetTable;
use tracing::debug;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file into a [`SheetTable`].
pub fn read_sheet(path: &Path) -> Result<SheetTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let table = collect_sheet(reader).map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "sheet loaded"
    );
    Ok(table)
}

/// Read CSV from any reader (an upload body, a test fixture).
pub fn read_sheet_from_reader<R: Read>(input: R) -> csv::Result<SheetTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_sheet(reader)
}

fn collect_sheet<R: Read>(mut reader: csv::Reader<R>) -> csv::Result<SheetTable> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(header_row) => {
                let mut row: Vec<String> = record.iter().map(str::to_string).collect();
                row.resize(header_row.len().max(row.len()), String::new());
                rows.push(row);
            }
        }
    }
    Ok(SheetTable::new(headers.unwrap_or_default(), rows))
}
