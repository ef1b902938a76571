//! Machine-readable command output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sheetcheck_model::{IdentifierScheme, ValidationReport};
use sheetcheck_validate::identifiers::{classify, ean_is_isbn};

/// Identifier classification of one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub code: String,
    pub schemes: Vec<IdentifierScheme>,
    /// Whether the bare code is shaped like an ISBN, regardless of validity.
    pub isbn_shaped: bool,
}

pub fn identify(code: &str) -> Identification {
    Identification {
        code: code.to_string(),
        schemes: classify(code),
        isbn_shaped: ean_is_isbn(code),
    }
}

/// Serialize `report` as pretty JSON.
pub fn report_json(report: &ValidationReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize validation report")
}

pub fn write_report(path: &Path, report: &ValidationReport) -> Result<()> {
    let json = report_json(report)?;
    fs::write(path, json).with_context(|| format!("write report: {}", path.display()))
}
