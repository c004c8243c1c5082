//! Per-(parameter, commodity) statistics over unsafe observations.

use std::collections::HashMap;

use residue_model::{AggregateRecord, CellValue, IdentifyingPositions, ParameterBlock, Sheet};

/// Verdict text that marks an observation as unsafe.
pub const UNSAFE_VERDICT: &str = "unsafe";

/// True when the compliance cell, trimmed and case-folded, reads `unsafe`.
pub fn is_unsafe_verdict(cell: &CellValue) -> bool {
    cell.normalized_text() == UNSAFE_VERDICT
}

#[derive(Debug, Clone)]
struct ParameterRecords {
    name: String,
    records: Vec<AggregateRecord>,
    by_commodity: HashMap<String, usize>,
}

/// Records keyed by (parameter, commodity), grouped by parameter.
///
/// Parameters keep the order in which they were first observed, and so do
/// commodities within a parameter.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    parameters: Vec<ParameterRecords>,
    by_parameter: HashMap<String, usize>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one numeric observation for the key.
    pub fn observe(&mut self, parameter: &str, commodity: &str, value: f64, is_unsafe: bool) {
        let param_idx = match self.by_parameter.get(parameter) {
            Some(&idx) => idx,
            None => {
                self.parameters.push(ParameterRecords {
                    name: parameter.to_string(),
                    records: Vec::new(),
                    by_commodity: HashMap::new(),
                });
                let idx = self.parameters.len() - 1;
                self.by_parameter.insert(parameter.to_string(), idx);
                idx
            }
        };
        let entry = &mut self.parameters[param_idx];
        let record_idx = match entry.by_commodity.get(commodity) {
            Some(&idx) => idx,
            None => {
                entry
                    .records
                    .push(AggregateRecord::new(entry.name.clone(), commodity));
                let idx = entry.records.len() - 1;
                entry.by_commodity.insert(commodity.to_string(), idx);
                idx
            }
        };
        entry.records[record_idx].observe(value, is_unsafe);
    }

    pub fn get(&self, parameter: &str, commodity: &str) -> Option<&AggregateRecord> {
        let entry = &self.parameters[*self.by_parameter.get(parameter)?];
        entry
            .by_commodity
            .get(commodity)
            .map(|&idx| &entry.records[idx])
    }

    /// Records in output order.
    pub fn records(&self) -> impl Iterator<Item = &AggregateRecord> {
        self.parameters.iter().flat_map(|entry| entry.records.iter())
    }

    /// Parameter names in first-observed order.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.parameters.iter().map(|entry| entry.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Aggregates the selected rows over the given blocks.
///
/// Blocks are visited in order and rows within each block, so parameters
/// appear in column order and commodities in row order. Value cells that do
/// not coerce to a number contribute nothing.
pub fn aggregate(
    sheet: &Sheet,
    positions: &IdentifyingPositions,
    rows: &[usize],
    blocks: &[ParameterBlock],
) -> Aggregation {
    let mut aggregation = Aggregation::new();
    for block in blocks {
        for &row in rows {
            let Some(value) = sheet.cell(row, block.value).as_f64() else {
                continue;
            };
            let commodity = sheet.cell(row, positions.commodity).as_text();
            let is_unsafe = is_unsafe_verdict(sheet.cell(row, block.compliance()));
            aggregation.observe(&block.name, commodity.trim(), value, is_unsafe);
        }
    }
    aggregation
}
