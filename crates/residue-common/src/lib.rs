//! Shared utilities for residue crates.
//!
//! This crate provides the conversions between Polars values and the tagged
//! [`CellValue`](residue_model::CellValue) cells used by the pipeline.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_cell, any_to_f64, any_to_string, cell_column};
pub use residue_model::{format_numeric, parse_f64};
