use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use sheetcheck_cli::output::Identification;
use sheetcheck_model::IdentifierScheme;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult, max_issues: usize) {
    println!("Sheet: {}", result.sheet.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rules"),
        header_cell("Rows"),
        header_cell("Cells checked"),
        header_cell("Invalid cells"),
    ]);
    apply_table_style(&mut table, 100);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rule_count),
        Cell::new(report.rows_checked),
        Cell::new(report.cells_checked),
        count_cell(report.failure_count(), Color::Red),
    ]);
    println!("{table}");

    for column in &result.duplicate_columns {
        eprintln!("warning: several rules for column {column}; the last one applies");
    }
    for column in &result.missing_columns {
        eprintln!("warning: rule column {column} is not a sheet header");
    }
    print_issue_table(result, max_issues);
}

fn print_issue_table(result: &CheckResult, max_issues: usize) {
    let failures = &result.report.failures;
    if failures.is_empty() || max_issues == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Rule"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table, 160);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Fixed(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(40)),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in failures.iter().take(max_issues) {
        table.add_row(vec![
            Cell::new(failure.row),
            Cell::new(&failure.column_name),
            Cell::new(failure.rule.label()).fg(Color::Yellow),
            value_cell(&failure.value),
            Cell::new(&failure.message),
        ]);
    }
    println!();
    println!("Invalid cells:");
    println!("{table}");
    if failures.len() > max_issues {
        println!("... and {} more", failures.len() - max_issues);
    }
}

pub fn print_identifications(rows: &[Identification]) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Code")];
    header.extend(schemes().map(|scheme| header_cell(scheme.label())));
    header.push(header_cell("ISBN-shaped"));
    table.set_header(header);
    apply_table_style(&mut table, 120);
    for index in 1..=schemes().count() + 1 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for row in rows {
        let mut cells = vec![Cell::new(&row.code)];
        cells.extend(schemes().map(|scheme| flag_cell(row.schemes.contains(&scheme))));
        cells.push(flag_cell(row.isbn_shaped));
        table.add_row(cells);
    }
    println!("{table}");
}

fn schemes() -> impl Iterator<Item = IdentifierScheme> {
    IdentifierScheme::all()
        .iter()
        .copied()
        .filter(|scheme| *scheme != IdentifierScheme::GtinFamily)
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
