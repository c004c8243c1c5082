//! Header detection and row collection shared by the CSV and workbook readers.

use tracing::{debug, warn};

use residue_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};

/// Normalizes a header value: strips a BOM and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Collects records into a [`Sheet`]. Blank records are skipped and the first
/// non-blank record becomes the header row.
#[derive(Debug, Default)]
pub(crate) struct SheetAssembler {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<CellValue>>,
    /// Rows with non-blank cells right of the last header column.
    overlong_rows: usize,
    widest_row: usize,
}

impl SheetAssembler {
    pub(crate) fn push(&mut self, cells: Vec<CellValue>) {
        if cells.iter().all(CellValue::is_blank) {
            return;
        }
        let Some(headers) = &self.headers else {
            self.headers = Some(
                cells
                    .iter()
                    .map(|cell| normalize_header(&cell.as_text()))
                    .collect(),
            );
            return;
        };
        if let Some(extra) = cells.get(headers.len()..)
            && extra.iter().any(|cell| !cell.is_blank())
        {
            self.overlong_rows += 1;
            self.widest_row = self.widest_row.max(cells.len());
        }
        self.rows.push(cells);
    }

    pub(crate) fn finish(self, source_name: &str, kind: &str) -> Result<Sheet> {
        let Some(headers) = self.headers else {
            return Err(IngestError::NoHeader {
                source_name: source_name.to_string(),
            });
        };
        if self.overlong_rows > 0 {
            warn!(
                source = source_name,
                rows = self.overlong_rows,
                header_columns = headers.len(),
                widest_row = self.widest_row,
                "cells beyond the header row were dropped"
            );
        }
        let sheet = Sheet::new(headers, self.rows);
        debug!(
            source = source_name,
            columns = sheet.column_count(),
            rows = sheet.row_count(),
            "loaded {kind} sheet"
        );
        Ok(sheet)
    }
}
