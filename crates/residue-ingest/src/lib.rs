//! Residue sheet ingestion.
//!
//! Loads laboratory residue tables into [`Sheet`](residue_model::Sheet)s from
//! CSV files, spreadsheet workbooks or an existing Polars DataFrame.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use residue_ingest::read_sheet;
//!
//! let sheet = read_sheet(Path::new("data/cumin.xlsx"), None)?;
//! println!("{} rows", sheet.row_count());
//! ```

mod assemble;
mod error;
mod frame;
mod reader;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Reading ===
pub use assemble::normalize_header;
pub use reader::{read_csv_sheet, read_csv_sheet_from_reader};
pub use workbook::{is_workbook_path, read_sheet, read_xlsx_sheet};

// === DataFrame Conversion ===
pub use frame::sheet_from_dataframe;
