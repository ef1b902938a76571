//! Table traversal: bind headers to rules and check every bound cell.

use sheetcheck_model::{CellFailure, SheetTable, ValidationReport, cell_text};
use tracing::{debug, debug_span, trace};

use crate::evaluator::CompiledRule;
use crate::rule_set::RuleSet;

/// Validate every data row of `table`.
pub fn validate_table(rules: &RuleSet, table: &SheetTable) -> ValidationReport {
    let _span = debug_span!("validate_table", rows = table.rows.len()).entered();
    log_unbound_rules(rules, &table.headers);
    validate_rows(rules, &table.headers, table.rows.iter().map(Vec::as_slice), 1)
}

/// Validate a run of rows sharing `headers`.
///
/// `first_row` is the 1-based data row number of the first item, so
/// separately validated chunks of one table report consistent positions
/// and can be combined with [`ValidationReport::merge`]. Columns without a
/// rule are skipped; short rows read missing cells as empty.
pub fn validate_rows<'a, I>(
    rules: &RuleSet,
    headers: &[String],
    rows: I,
    first_row: usize,
) -> ValidationReport
where
    I: IntoIterator<Item = &'a [String]>,
{
    let bound = bind_columns(rules, headers);
    let mut report = ValidationReport::default();

    for (offset, row) in rows.into_iter().enumerate() {
        let row_number = first_row + offset;
        report.rows_checked += 1;
        for &(column, rule) in &bound {
            let value = cell_text(row, column);
            report.cells_checked += 1;
            if rule.check(value) {
                continue;
            }
            trace!(
                row = row_number,
                column = headers[column].as_str(),
                rule = rule.rule().kind().label(),
                "cell failed rule"
            );
            report.failures.push(CellFailure {
                row: row_number,
                column,
                column_name: headers[column].clone(),
                value: value.to_string(),
                rule: rule.rule().kind().clone(),
                message: rule.rule().message().to_string(),
            });
        }
    }

    debug!(
        rows = report.rows_checked,
        cells = report.cells_checked,
        failures = report.failures.len(),
        "rows validated"
    );
    report
}

/// Header positions paired with their rule, in column order.
fn bind_columns<'r>(rules: &'r RuleSet, headers: &[String]) -> Vec<(usize, &'r CompiledRule)> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| rules.rule_for(header).map(|rule| (index, rule)))
        .collect()
}

fn log_unbound_rules(rules: &RuleSet, headers: &[String]) {
    for column in rules.columns() {
        if !headers.iter().any(|header| header == column) {
            debug!(column, "rule column not present in table headers");
        }
    }
}

#[cfg(test)]
mod tests {
    use sheetcheck_model::{RuleKind, ValidationRule};

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn unbound_columns_are_skipped() {
        let rules = RuleSet::new([ValidationRule::new("A", RuleKind::Required).unwrap()]).unwrap();
        let table = SheetTable::new(strings(&["A", "B"]), vec![strings(&["x", ""])]);
        let report = validate_table(&rules, &table);
        assert!(report.is_clean());
        assert_eq!(report.cells_checked, 1);
    }

    #[test]
    fn short_rows_are_empty_cells() {
        let rules = RuleSet::new([ValidationRule::new("B", RuleKind::Required).unwrap()]).unwrap();
        let table = SheetTable::new(strings(&["A", "B"]), vec![strings(&["x"])]);
        let report = validate_table(&rules, &table);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].value, "");
        assert_eq!(report.failures[0].column, 1);
    }

    #[test]
    fn repeated_headers_share_the_rule() {
        let rules = RuleSet::new([ValidationRule::new("A", RuleKind::Numeric).unwrap()]).unwrap();
        let table = SheetTable::new(strings(&["A", "A"]), vec![strings(&["1", "x"])]);
        let report = validate_table(&rules, &table);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].column, 1);
    }

    #[test]
    fn row_numbers_start_at_first_row() {
        let rules = RuleSet::new([ValidationRule::new("A", RuleKind::Required).unwrap()]).unwrap();
        let headers = strings(&["A"]);
        let rows = [strings(&["x"]), strings(&[""])];
        let report = validate_rows(&rules, &headers, rows.iter().map(Vec::as_slice), 11);
        assert_eq!(report.rows_checked, 2);
        assert_eq!(report.failures[0].row, 12);
    }
}
