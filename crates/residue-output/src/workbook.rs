//! Excel workbook output: one worksheet per result table.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

use residue_model::{CellValue, ResultTable};

fn write_sheet(sheet: &mut Worksheet, table: &ResultTable, header: &Format) -> Result<()> {
    for (col, name) in table.columns.iter().enumerate() {
        let col = u16::try_from(col).context("too many columns for a worksheet")?;
        sheet.write_string_with_format(0, col, name, header)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1).context("too many rows for a worksheet")?;
        for (col, cell) in row.iter().enumerate().take(table.columns.len()) {
            let col = u16::try_from(col).context("too many columns for a worksheet")?;
            match cell {
                CellValue::Number(value) if value.is_finite() => {
                    sheet.write_number(row_num, col, *value)?;
                }
                CellValue::Missing => {}
                cell => {
                    sheet.write_string(row_num, col, cell.as_text())?;
                }
            }
        }
    }
    Ok(())
}

/// Writes `tables` into one workbook at `path`, one worksheet each.
///
/// `sheet_names` must hold one valid, unique worksheet name per table. The
/// header row is bold. Numbers stay numeric cells and `Missing` cells are left
/// empty.
pub fn write_workbook(tables: &[ResultTable], sheet_names: &[String], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    for (table, name) in tables.iter().zip(sheet_names) {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(name)
            .with_context(|| format!("name worksheet '{name}'"))?;
        write_sheet(sheet, table, &header)
            .with_context(|| format!("write worksheet '{name}'"))?;
        debug!(sheet = %name, rows = table.row_count(), "wrote worksheet");
    }
    workbook
        .save(path)
        .with_context(|| format!("save {}", path.display()))?;
    Ok(())
}
