//! Workbook (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) loading into [`Sheet`]s.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use residue_model::{CellValue, Sheet};

use crate::assemble::SheetAssembler;
use crate::error::{IngestError, Result};
use crate::reader::read_csv_sheet;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// True when `path` has a spreadsheet workbook extension.
pub fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::String(text) => CellValue::from_raw(text),
        other => CellValue::from_raw(&other.to_string()),
    }
}

/// Reads one worksheet of a workbook.
///
/// `worksheet` selects a sheet by name; `None` reads the first sheet. Header
/// detection matches [`read_csv_sheet`].
pub fn read_xlsx_sheet(path: &Path, worksheet: Option<&str>) -> Result<Sheet> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|err| workbook_error(err.to_string()))?;
    let sheet_names = workbook.sheet_names();
    let name = match worksheet {
        Some(requested) => sheet_names
            .iter()
            .find(|name| name.as_str() == requested)
            .or_else(|| {
                sheet_names
                    .iter()
                    .find(|name| name.trim().eq_ignore_ascii_case(requested.trim()))
            })
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: requested.to_string(),
                available: sheet_names.clone(),
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoWorksheet {
                path: path.to_path_buf(),
            })?,
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|err| workbook_error(format!("worksheet '{name}': {err}")))?;

    let mut assembler = SheetAssembler::default();
    for row in range.rows() {
        assembler.push(row.iter().map(data_to_cell).collect());
    }
    assembler.finish(&format!("{}[{name}]", path.display()), "xlsx")
}

/// Reads a sheet from a CSV file or a workbook, chosen by file extension.
///
/// `worksheet` only applies to workbooks.
pub fn read_sheet(path: &Path, worksheet: Option<&str>) -> Result<Sheet> {
    if is_workbook_path(path) {
        read_xlsx_sheet(path, worksheet)
    } else {
        read_csv_sheet(path)
    }
}
