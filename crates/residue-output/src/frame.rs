//! Conversion of result tables into Polars DataFrames.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use residue_common::cell_column;
use residue_model::{CellValue, ResultTable};

use crate::naming::unique_names;

fn is_integral(cell: &CellValue) -> bool {
    match cell {
        CellValue::Number(value) => value.fract() == 0.0 && value.abs() < i64::MAX as f64,
        CellValue::Missing => true,
        CellValue::Text(_) => false,
    }
}

fn table_column(name: &str, cells: &[CellValue]) -> Column {
    let has_number = cells.iter().any(|cell| matches!(cell, CellValue::Number(_)));
    if has_number && cells.iter().all(is_integral) {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|cell| cell.as_f64().map(|value| value as i64))
            .collect();
        return Series::new(name.into(), values).into_column();
    }
    cell_column(name, cells)
}

fn table_cells(table: &ResultTable, idx: usize) -> Vec<CellValue> {
    table
        .rows
        .iter()
        .map(|row| row.get(idx).cloned().unwrap_or_default())
        .collect()
}

/// Builds a DataFrame with one column per table column.
///
/// Whole-number columns (sequence numbers, counts) become `Int64`, other
/// numeric columns `Float64`, everything else `String`. Repeated headers are
/// made unique.
pub fn table_to_dataframe(table: &ResultTable) -> Result<DataFrame> {
    let names = unique_names(&table.columns);
    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| table_column(name, &table_cells(table, idx)))
        .collect();
    DataFrame::new(columns).with_context(|| format!("build frame for {}", table.title()))
}

/// Builds a DataFrame of display text, one `String` column per table column.
///
/// Numbers are rendered by [`CellValue::as_text`], so a value prints the same
/// whatever else shares its column. `Missing` cells stay null.
pub fn table_to_text_dataframe(table: &ResultTable) -> Result<DataFrame> {
    let names = unique_names(&table.columns);
    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<String>> = table_cells(table, idx)
                .iter()
                .map(|cell| match cell {
                    CellValue::Missing => None,
                    cell => Some(cell.as_text()),
                })
                .collect();
            Series::new(name.as_str().into(), values).into_column()
        })
        .collect();
    DataFrame::new(columns).with_context(|| format!("build text frame for {}", table.title()))
}
