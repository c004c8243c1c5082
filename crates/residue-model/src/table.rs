use serde::{Deserialize, Serialize};

use crate::{CellValue, Region, SheetLayout};

/// One assembled output table, ready for a writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Category group the rows were filtered by.
    pub group: String,
    pub region: Region,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    pub fn new(group: impl Into<String>, region: Region, columns: Vec<String>) -> Self {
        Self {
            group: group.into(),
            region,
            columns,
            rows: Vec::new(),
        }
    }

    /// `"{group} - {region}"`, e.g. `Organic - Banned`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.group, self.region.label())
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A marker that could not be located on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMarker {
    pub region: Region,
    /// What was searched for: a column name or `#<index>`.
    pub selector: String,
}

/// Result of one pass over a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetReport {
    pub layout: SheetLayout,
    /// Tables in group order, off-label before banned within a group.
    pub tables: Vec<ResultTable>,
    pub missing_markers: Vec<MissingMarker>,
}

impl SheetReport {
    pub fn table(&self, group: &str, region: Region) -> Option<&ResultTable> {
        self.tables
            .iter()
            .find(|table| table.group == group && table.region == region)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(ResultTable::row_count).sum()
    }
}
