//! Assembly of result tables from the sheet, its layout and aggregates.

use residue_model::{
    AggregateRecord, CellValue, IdentifyingPositions, ParameterBlock, Region, ResultTable, Sheet,
    SheetLayout,
};

use crate::aggregate::Aggregation;

/// Rendered in place of min/max when no unsafe observation exists.
pub const NO_RESIDUE: &str = "No Residue";

pub const LONG_COLUMNS: [&str; 8] = [
    "Sample ID",
    "Commodity",
    "Category",
    "Variant",
    "Parameter",
    "Value",
    "Compliance",
    "Limit",
];

pub const AGGREGATE_COLUMNS: [&str; 8] = [
    "S.No",
    "Parameter",
    "Commodity",
    "Min Unsafe Value",
    "Max Unsafe Value",
    "Unsafe Samples",
    "Total Samples",
    "% Unsafe",
];

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|name| (*name).to_string()).collect()
}

/// Formats a percentage with two decimals, e.g. `50.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn range_cell(value: Option<f64>) -> CellValue {
    value.map_or_else(|| CellValue::from(NO_RESIDUE), CellValue::Number)
}

/// Sample id cell, or the 1-based row position when the sheet has no such column.
pub fn sample_id(sheet: &Sheet, positions: &IdentifyingPositions, row: usize) -> CellValue {
    match positions.sample_id {
        Some(col) => sheet.cell(row, col).clone(),
        None => CellValue::from(row + 1),
    }
}

/// One row per (row, block) pair whose value cell is not blank.
pub fn long_table(
    group: &str,
    region: Region,
    sheet: &Sheet,
    positions: &IdentifyingPositions,
    rows: &[usize],
    blocks: &[ParameterBlock],
) -> ResultTable {
    let mut table = ResultTable::new(group, region, owned(&LONG_COLUMNS));
    for &row in rows {
        for block in blocks {
            let value = sheet.cell(row, block.value);
            if value.is_blank() {
                continue;
            }
            table.push_row(vec![
                sample_id(sheet, positions, row),
                sheet.cell(row, positions.commodity).clone(),
                sheet.cell(row, positions.category).clone(),
                sheet.cell(row, positions.variant).clone(),
                CellValue::Text(block.name.clone()),
                value.clone(),
                sheet.cell(row, block.compliance()).clone(),
                sheet.cell(row, block.limit()).clone(),
            ]);
        }
    }
    table
}

/// Table row for one aggregate record.
pub fn aggregate_row(sequence: usize, record: &AggregateRecord) -> Vec<CellValue> {
    let (min, max) = if record.has_residue() {
        (range_cell(record.min), range_cell(record.max))
    } else {
        (CellValue::from(NO_RESIDUE), CellValue::from(NO_RESIDUE))
    };
    vec![
        CellValue::from(sequence),
        CellValue::Text(record.parameter.clone()),
        CellValue::Text(record.commodity.clone()),
        min,
        max,
        CellValue::from(record.unsafe_count),
        CellValue::from(record.total),
        CellValue::Text(format_percent(record.percent_unsafe())),
    ]
}

/// One row per (parameter, commodity), numbered from 1 in output order.
pub fn aggregate_table(group: &str, region: Region, aggregation: &Aggregation) -> ResultTable {
    let mut table = ResultTable::new(group, region, owned(&AGGREGATE_COLUMNS));
    for (idx, record) in aggregation.records().enumerate() {
        table.push_row(aggregate_row(idx + 1, record));
    }
    table
}

/// Columns for a wide table.
///
/// Every column outside the parameter blocks of all resolved regions comes
/// first, in sheet order. Marker columns and unsegmented trailing columns are
/// kept there. The columns of `blocks` follow.
pub fn wide_columns(
    column_count: usize,
    layout: &SheetLayout,
    blocks: &[ParameterBlock],
) -> Vec<usize> {
    let mut in_block = vec![false; column_count];
    let all_blocks = Region::ALL
        .into_iter()
        .filter_map(|region| layout.region(region))
        .flat_map(|span| span.blocks.iter());
    for position in all_blocks.flat_map(ParameterBlock::positions) {
        if let Some(flag) = in_block.get_mut(position) {
            *flag = true;
        }
    }
    (0..column_count)
        .filter(|&col| !in_block[col])
        .chain(blocks.iter().flat_map(ParameterBlock::positions))
        .collect()
}

/// The selected rows restricted to `columns`, headers copied from the sheet.
pub fn wide_table(
    group: &str,
    region: Region,
    sheet: &Sheet,
    rows: &[usize],
    columns: &[usize],
) -> ResultTable {
    let headers = columns
        .iter()
        .map(|&col| sheet.column_name(col).unwrap_or_default().to_string())
        .collect();
    let mut table = ResultTable::new(group, region, headers);
    for &row in rows {
        table.push_row(
            columns
                .iter()
                .map(|&col| sheet.cell(row, col).clone())
                .collect(),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use residue_model::RegionSpan;

    use super::*;

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(50.0), "50.00%");
        assert_eq!(format_percent(100.0 / 3.0), "33.33%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn record_without_residue_renders_sentinel() {
        let mut record = AggregateRecord::new("Ethion", "Cumin");
        record.observe(0.2, false);
        let row = aggregate_row(3, &record);
        assert_eq!(row[0], CellValue::Number(3.0));
        assert_eq!(row[3], CellValue::from(NO_RESIDUE));
        assert_eq!(row[4], CellValue::from(NO_RESIDUE));
        assert_eq!(row[5], CellValue::Number(0.0));
        assert_eq!(row[6], CellValue::Number(1.0));
        assert_eq!(row[7], CellValue::from("0.00%"));
    }

    fn layout_with_trailing_column() -> SheetLayout {
        // 0..3 identifying, 3 off-label marker, 4..10 two blocks, 10 trailing,
        // 11 banned marker, 12..15 one block, 15 remarks.
        SheetLayout {
            identifying: IdentifyingPositions {
                commodity: 0,
                category: 1,
                variant: 2,
                sample_id: None,
            },
            off_label: Some(RegionSpan {
                region: Region::OffLabel,
                marker: 3,
                start: 4,
                end: 11,
                blocks: vec![ParameterBlock::new("A", 4), ParameterBlock::new("B", 7)],
            }),
            banned: Some(RegionSpan {
                region: Region::Banned,
                marker: 11,
                start: 12,
                end: 16,
                blocks: vec![ParameterBlock::new("C", 12)],
            }),
        }
    }

    #[test]
    fn wide_columns_keep_every_non_block_column() {
        let layout = layout_with_trailing_column();
        let off_label = &layout.off_label.as_ref().unwrap().blocks;
        assert_eq!(
            wide_columns(16, &layout, off_label),
            [0, 1, 2, 3, 10, 11, 15, 4, 5, 6, 7, 8, 9]
        );
        let banned = &layout.banned.as_ref().unwrap().blocks;
        assert_eq!(
            wide_columns(16, &layout, banned),
            [0, 1, 2, 3, 10, 11, 15, 12, 13, 14]
        );
    }

    #[test]
    fn wide_columns_without_blocks_are_the_shared_columns() {
        let layout = layout_with_trailing_column();
        assert_eq!(wide_columns(16, &layout, &[]), [0, 1, 2, 3, 10, 11, 15]);
    }
}
