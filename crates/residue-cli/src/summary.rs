use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use residue_core::ResolvedLayout;
use residue_model::{Region, SheetReport};

use crate::types::{InspectResult, ProcessResult, TableSummary};

pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    println!("Mode: {}", result.mode.label());
    println!("{}", summary_table(&result.tables));
    for warning in missing_marker_warnings(&result.report) {
        eprintln!("warning: {warning}");
    }
}

/// One row per table plus a total row.
pub fn summary_table(tables: &[TableSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Group"),
        header_cell("Region"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_rows = 0usize;
    for summary in tables {
        total_rows += summary.rows;
        table.add_row(vec![
            Cell::new(&summary.sheet_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.group),
            region_cell(summary.region),
            count_cell(summary.rows),
            file_cell(summary.path.as_deref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Human-readable notes for every marker that was not found.
pub fn missing_marker_warnings(report: &SheetReport) -> Vec<String> {
    report
        .missing_markers
        .iter()
        .map(|missing| {
            format!(
                "{} marker '{}' not found; {} tables are empty. \
                 Pass --{}-column to select it by position.",
                missing.region.label(),
                missing.selector,
                missing.region.label().to_lowercase(),
                flag_prefix(missing.region)
            )
        })
        .collect()
}

fn flag_prefix(region: Region) -> &'static str {
    match region {
        Region::OffLabel => "offlabel",
        Region::Banned => "banned",
    }
}

pub fn print_inspect(result: &InspectResult) {
    println!("Input: {}", result.input.display());
    println!("{}", columns_table(&result.columns));
    println!("{}", layout_text(&result.columns, &result.resolved));
}

/// Column positions and headers.
pub fn columns_table(columns: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, name) in columns.iter().enumerate() {
        let name_cell = if name.is_empty() {
            dim_cell("(blank)")
        } else {
            Cell::new(name)
        };
        table.add_row(vec![Cell::new(idx), name_cell]);
    }
    table
}

/// Plain-text description of the identifying columns, markers and blocks.
pub fn layout_text(columns: &[String], resolved: &ResolvedLayout) -> String {
    let header = |idx: usize| columns.get(idx).map_or("", String::as_str);
    let identifying = &resolved.layout.identifying;
    let sample_id = identifying
        .sample_id
        .map_or_else(|| "row number".to_string(), |idx| format!("#{idx}"));
    let mut lines = vec![format!(
        "Identifying: commodity #{}, category #{}, variant #{}, sample id {}",
        identifying.commodity, identifying.category, identifying.variant, sample_id
    )];
    for region in Region::ALL {
        let label = region.label();
        let Some(span) = resolved.layout.region(region) else {
            let selector = resolved
                .missing_markers
                .iter()
                .find(|missing| missing.region == region)
                .map_or("", |missing| missing.selector.as_str());
            lines.push(format!("{label}: marker '{selector}' not found"));
            continue;
        };
        lines.push(format!(
            "{label}: marker #{} '{}', columns {}..{}, {} block(s)",
            span.marker,
            header(span.marker),
            span.start,
            span.end,
            span.blocks.len()
        ));
        for block in &span.blocks {
            lines.push(format!(
                "  {}: value #{}, compliance #{}, limit #{}",
                block.name,
                block.value,
                block.compliance(),
                block.limit()
            ));
        }
    }
    lines.join("\n")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn region_cell(region: Region) -> Cell {
    match region {
        Region::OffLabel => Cell::new(region.label()).fg(Color::Yellow),
        Region::Banned => Cell::new(region.label()).fg(Color::Red),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn file_cell(path: Option<&Path>) -> Cell {
    match path.and_then(Path::file_name) {
        Some(name) => Cell::new(name.to_string_lossy()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
