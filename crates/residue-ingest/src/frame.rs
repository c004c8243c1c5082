//! Conversion from Polars DataFrames.

use polars::prelude::DataFrame;

use residue_common::any_to_cell;
use residue_model::{CellValue, Sheet};

use crate::error::Result;

/// Converts a DataFrame into a [`Sheet`], keeping column order.
pub fn sheet_from_dataframe(df: &DataFrame) -> Result<Sheet> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let width = columns.len();
    let mut rows: Vec<Vec<CellValue>> = (0..df.height())
        .map(|_| Vec::with_capacity(width))
        .collect();
    for column in df.get_columns() {
        for (idx, row) in rows.iter_mut().enumerate() {
            row.push(any_to_cell(column.get(idx)?));
        }
    }
    Ok(Sheet::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    #[test]
    fn dataframe_cells_are_tagged() {
        let columns: Vec<Column> = vec![
            Series::new(" Commodity ".into(), vec!["Cumin", "Fennel"]).into_column(),
            Series::new("Ethion_value".into(), vec![Some(0.12), None]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();
        let sheet = sheet_from_dataframe(&df).unwrap();
        assert_eq!(sheet.columns(), ["Commodity", "Ethion_value"]);
        assert_eq!(sheet.cell(0, 1), &CellValue::Number(0.12));
        assert_eq!(sheet.cell(1, 1), &CellValue::Missing);
        assert_eq!(sheet.cell(1, 0), &CellValue::Text("Fennel".to_string()));
    }
}
