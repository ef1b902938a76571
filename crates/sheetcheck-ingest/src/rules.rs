//! Rule files.
//!
//! JSON files hold an array of rules:
//!
//! ```json
//! [{"columnName": "CEST", "ruleType": "MaxLength", "ruleValue": "4", "errorMessage": "Invalid format"}]
//! ```
//!
//! CSV files use the same names as header columns; empty cells mean "not set".

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use sheetcheck_model::ValidationRule;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Load rules from a `.json` or `.csv` file.
pub fn load_rules(path: &Path) -> Result<Vec<ValidationRule>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let rules = match extension.as_deref() {
        Some("json") => {
            let file = File::open(path).map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_rules_json(BufReader::new(file)).map_err(|source| IngestError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        Some("csv") => {
            let file = File::open(path).map_err(|source| IngestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_rules_csv(file).map_err(|source| IngestError::Csv {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => return Err(IngestError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), rules = rules.len(), "rules loaded");
    Ok(rules)
}

pub fn parse_rules_json<R: Read>(input: R) -> serde_json::Result<Vec<ValidationRule>> {
    serde_json::from_reader(input)
}

pub fn parse_rules_csv<R: Read>(input: R) -> csv::Result<Vec<ValidationRule>> {
    ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input)
        .into_deserialize()
        .collect()
}
