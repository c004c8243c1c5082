//! Output generation for residue result tables.
//!
//! Tables are written into one Excel workbook, a worksheet per
//! (category group, region), or as one CSV file each. Both go through the
//! same naming and planning so a dry run reports what a real run writes.

pub mod frame;
pub mod naming;
pub mod workbook;
pub mod writer;

pub use frame::{table_to_dataframe, table_to_text_dataframe};
pub use naming::{
    MAX_SHEET_NAME_CHARS, file_stem, sheet_name, unique_names, unique_worksheet_names,
    worksheet_name,
};
pub use workbook::write_workbook;
pub use writer::{
    DEFAULT_WORKBOOK_STEM, OutputFormat, OutputOptions, WrittenTable, plan_outputs,
    write_table_csv, write_tables,
};
