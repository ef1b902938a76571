use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;

/// A cell that failed its column rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFailure {
    /// 1-based data row (the header row is not counted).
    pub row: usize,
    /// 0-based column position.
    pub column: usize,
    pub column_name: String,
    pub value: String,
    pub rule: RuleKind,
    /// Configured error message, or the default one.
    pub message: String,
}

/// Outcome of validating one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub rows_checked: usize,
    pub cells_checked: usize,
    pub failures: Vec<CellFailure>,
}

impl ValidationReport {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures_for_column<'a>(
        &'a self,
        column_name: &'a str,
    ) -> impl Iterator<Item = &'a CellFailure> + 'a {
        self.failures
            .iter()
            .filter(move |failure| failure.column_name == column_name)
    }

    /// Fold another report (e.g. from a separately validated row chunk) into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.rows_checked += other.rows_checked;
        self.cells_checked += other.cells_checked;
        self.failures.extend(other.failures);
    }
}
