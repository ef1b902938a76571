//! File-based loading of sheets and rule files.

use std::fs;

use sheetcheck_ingest::{IngestError, load_rules, read_sheet};
use sheetcheck_model::RuleKind;

#[test]
fn test_load_sheet_and_rules_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("products.csv");
    fs::write(
        &sheet_path,
        "Nome,CODIGO_EAN,VALOR\nJohn,036000291452,2\n,0,\n",
    )
    .unwrap();
    let rules_path = dir.path().join("rules.json");
    fs::write(
        &rules_path,
        r#"[
            {"columnName": "Nome", "ruleType": "Required"},
            {"columnName": "CODIGO_EAN", "ruleType": "GTIN", "errorMessage": "Invalid EAN code"},
            {"columnName": "VALOR", "ruleType": "NumericGTZero"}
        ]"#,
    )
    .unwrap();

    let table = read_sheet(&sheet_path).unwrap();
    assert_eq!(table.headers, vec!["Nome", "CODIGO_EAN", "VALOR"]);
    assert_eq!(table.row_count(), 2);

    let rules = load_rules(&rules_path).unwrap();
    let kinds: Vec<&RuleKind> = rules.iter().map(|rule| rule.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            &RuleKind::Required,
            &RuleKind::ProductIdentifier,
            &RuleKind::NumericPositive
        ]
    );
}

#[test]
fn test_csv_rule_file() {
    let dir = tempfile::tempdir().unwrap();
    let rules_path = dir.path().join("rules.CSV");
    fs::write(
        &rules_path,
        "columnName,ruleType,ruleValue,errorMessage\nNCM,Length,8,Invalid format\n",
    )
    .unwrap();
    let rules = load_rules(&rules_path).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].kind(), &RuleKind::ExactLength);
}

#[test]
fn test_rule_file_errors() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("rules.yaml");
    fs::write(&yaml, "- columnName: A").unwrap();
    assert!(matches!(
        load_rules(&yaml),
        Err(IngestError::UnsupportedFormat(_))
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_rules(&missing), Err(IngestError::Io { .. })));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[{").unwrap();
    assert!(matches!(load_rules(&broken), Err(IngestError::Json { .. })));
}

#[test]
fn test_missing_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_sheet(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(IngestError::Csv { .. })));
}
