//! CSV loading into [`Sheet`]s.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use residue_model::{CellValue, Sheet};

use crate::assemble::SheetAssembler;
use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::from_raw(raw.trim_matches('\u{feff}'))
}

/// Reads a CSV file. The first non-blank record is the header row.
pub fn read_csv_sheet(path: &Path) -> Result<Sheet> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_sheet_from_reader(file, &path.display().to_string())
}

/// Reads CSV data from any reader; `source_name` only labels errors and logs.
pub fn read_csv_sheet_from_reader<R: Read>(input: R, source_name: &str) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut assembler = SheetAssembler::default();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            source_name: source_name.to_string(),
            source,
        })?;
        assembler.push(record.iter().map(normalize_cell).collect());
    }
    assembler.finish(source_name, "csv")
}
