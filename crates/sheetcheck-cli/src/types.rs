use std::path::PathBuf;

use sheetcheck_model::ValidationReport;

/// Everything the summary needs about one `check` run.
#[derive(Debug)]
pub struct CheckResult {
    pub sheet: PathBuf,
    pub rule_count: usize,
    pub duplicate_columns: Vec<String>,
    /// Rule columns absent from the sheet headers.
    pub missing_columns: Vec<String>,
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}
