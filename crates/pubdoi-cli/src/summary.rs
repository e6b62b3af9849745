use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pubdoi_cli::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    if result.dry_run {
        println!("File: {} (dry run, nothing written)", result.csv_path.display());
    } else {
        println!("File: {}", result.csv_path.display());
    }
    let mut table = Table::new();
    let first_column = if result.dry_run { "Ready" } else { "Updated" };
    table.set_header(vec![
        header_cell(first_column),
        header_cell("Skipped"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    let first_count = if result.dry_run {
        result.ready
    } else {
        result.updated
    };
    table.add_row(vec![
        Cell::new(first_count).fg(Color::Green),
        Cell::new(result.skipped),
        count_cell(result.failed, Color::Red),
    ]);
    println!("{table}");
    print_failure_table(result);
}

fn print_failure_table(result: &ProcessResult) {
    if result.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Publication"),
        header_cell("Stage"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &result.failures {
        table.add_row(vec![
            Cell::new(failure.row_number),
            Cell::new(&failure.label),
            Cell::new(failure.stage).fg(Color::Yellow),
            Cell::new(&failure.reason),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
