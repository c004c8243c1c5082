use serde::{Deserialize, Serialize};

use crate::CellValue;

static MISSING: CellValue = CellValue::Missing;

/// One worksheet: ordered column names and rows of cells.
///
/// Column names are trimmed once on construction and their order is never
/// changed afterwards. Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns: Vec<String> = columns
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header text at `col`, or `None` when out of range.
    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(String::as_str)
    }

    /// Cell at (`row`, `col`). Out-of-range positions read as `Missing`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&MISSING)
    }
}
