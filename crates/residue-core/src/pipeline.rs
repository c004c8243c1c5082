//! One parameterized pass over a sheet.

use tracing::{debug, info, info_span};

use residue_model::{
    OutputMode, PipelineConfig, Region, RegionSpan, ResultTable, Result, Sheet, SheetLayout,
    SheetReport,
};

use crate::aggregate::aggregate;
use crate::filter::RowFilter;
use crate::layout::{ResolvedLayout, resolve_layout};
use crate::report::{
    AGGREGATE_COLUMNS, LONG_COLUMNS, aggregate_table, long_table, wide_columns, wide_table,
};

/// Runs the whole pipeline: layout, then one table per group and region.
///
/// Tables come out in group order with off-label before banned. A region whose
/// marker was not found yields an empty table with the mode's header. Layout
/// and configuration errors abort the pass before any table is built.
pub fn process_sheet(sheet: &Sheet, config: &PipelineConfig) -> Result<SheetReport> {
    let sheet_span = info_span!(
        "process_sheet",
        columns = sheet.column_count(),
        rows = sheet.row_count(),
        mode = config.mode.label()
    );
    let _guard = sheet_span.enter();

    config.validate()?;
    let ResolvedLayout {
        layout,
        missing_markers,
    } = resolve_layout(sheet.columns(), config)?;

    let mut tables = Vec::with_capacity(config.groups.len() * Region::ALL.len());
    for group in &config.groups {
        let filter = RowFilter::new(group);
        let rows = filter.select(sheet, &layout.identifying);
        debug!(group = %group.name, rows = rows.len(), "filtered rows");
        for region in Region::ALL {
            let table = match layout.region(region) {
                Some(span) => build_table(&group.name, span, sheet, &layout, &rows, config.mode),
                None => empty_table(&group.name, region, config.mode, &layout, sheet),
            };
            tables.push(table);
        }
    }

    let report = SheetReport {
        layout,
        tables,
        missing_markers,
    };
    info!(
        tables = report.tables.len(),
        rows = report.total_rows(),
        missing_markers = report.missing_markers.len(),
        "sheet processed"
    );
    Ok(report)
}

fn build_table(
    group: &str,
    span: &RegionSpan,
    sheet: &Sheet,
    layout: &SheetLayout,
    rows: &[usize],
    mode: OutputMode,
) -> ResultTable {
    let positions = &layout.identifying;
    match mode {
        OutputMode::Long => long_table(group, span.region, sheet, positions, rows, &span.blocks),
        OutputMode::Aggregate => {
            let aggregation = aggregate(sheet, positions, rows, &span.blocks);
            aggregate_table(group, span.region, &aggregation)
        }
        OutputMode::Wide => {
            let columns = wide_columns(sheet.column_count(), layout, &span.blocks);
            wide_table(group, span.region, sheet, rows, &columns)
        }
    }
}

fn empty_table(
    group: &str,
    region: Region,
    mode: OutputMode,
    layout: &SheetLayout,
    sheet: &Sheet,
) -> ResultTable {
    let columns: Vec<String> = match mode {
        OutputMode::Long => LONG_COLUMNS.iter().map(|name| (*name).to_string()).collect(),
        OutputMode::Aggregate => AGGREGATE_COLUMNS
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
        OutputMode::Wide => {
            wide_columns(sheet.column_count(), layout, &[])
                .into_iter()
                .map(|col| sheet.column_name(col).unwrap_or_default().to_string())
                .collect()
        }
    };
    ResultTable::new(group, region, columns)
}
