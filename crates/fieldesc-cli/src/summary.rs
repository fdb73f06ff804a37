use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CheckResult, FileReport};

/// Per-file counts for files with findings or failures, plus a total row.
///
/// Returns `None` when every file is clean.
pub fn summary_table(result: &CheckResult) -> Option<Table> {
    let flagged: Vec<&FileReport> = result
        .files
        .iter()
        .filter(|file| !file.diagnostics.is_empty())
        .collect();
    if flagged.is_empty() && result.failures.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Structs"),
        header_cell("Fields"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for file in flagged {
        let fields: usize = file.diagnostics.iter().map(|d| d.fields.len()).sum();
        table.add_row(vec![
            Cell::new(file.path.display()),
            count_cell(file.diagnostics.len(), Color::Yellow),
            count_cell(fields, Color::Yellow),
            Cell::new("missing").fg(Color::Yellow),
        ]);
    }
    for failure in &result.failures {
        table.add_row(vec![
            Cell::new(failure.path.display()),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.diagnostic_count(), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(result.missing_field_count(), Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(format!("{} checked", result.files.len())).add_attribute(Attribute::Bold),
    ]);
    Some(table)
}

/// Condensed style shared by the `doc` listing.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
