use anyhow::{Context, Result};
use sheetcheck_cli::logging::redact_value;
use sheetcheck_cli::output::{Identification, identify, write_report};
use sheetcheck_ingest::{load_rules, read_sheet};
use sheetcheck_validate::{RuleSet, validate_table};
use tracing::{info, info_span, trace, warn};

use crate::cli::{CheckArgs, IdentifyArgs};
use crate::types::CheckResult;

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let _span = info_span!("check", sheet = %args.sheet.display()).entered();

    let rules = load_rules(&args.rules)
        .with_context(|| format!("load rules: {}", args.rules.display()))?;
    let rule_set = RuleSet::new(rules)
        .with_context(|| format!("invalid rule set: {}", args.rules.display()))?;
    let table =
        read_sheet(&args.sheet).with_context(|| format!("read sheet: {}", args.sheet.display()))?;

    let missing_columns: Vec<String> = rule_set
        .columns()
        .filter(|column| table.column_index(column).is_none())
        .map(str::to_string)
        .collect();
    for column in &missing_columns {
        warn!(column = %column, "rule column not found in sheet headers");
    }

    let report = validate_table(&rule_set, &table);
    for failure in &report.failures {
        trace!(
            row = failure.row,
            column = %failure.column_name,
            value = redact_value(&failure.value),
            "invalid cell"
        );
    }
    info!(
        rows = report.rows_checked,
        cells = report.cells_checked,
        failures = report.failure_count(),
        "sheet validated"
    );

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        info!(path = %path.display(), "report written");
    }

    Ok(CheckResult {
        sheet: args.sheet.clone(),
        rule_count: rule_set.len(),
        duplicate_columns: rule_set.duplicate_columns().to_vec(),
        missing_columns,
        report,
        report_path: args.report.clone(),
    })
}

pub fn run_identify(args: &IdentifyArgs) -> Vec<Identification> {
    args.codes.iter().map(|code| identify(code)).collect()
}
