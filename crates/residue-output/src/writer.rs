//! Workbook and CSV output of result tables.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::{debug, info};

use residue_model::ResultTable;

use crate::frame::table_to_text_dataframe;
use crate::naming::{file_stem, sheet_name, unique_worksheet_names};
use crate::workbook::write_workbook;

/// Default workbook file stem when no input name is known.
pub const DEFAULT_WORKBOOK_STEM: &str = "residue_report";

/// Output container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `.xlsx` workbook with a worksheet per table.
    #[default]
    Xlsx,
    /// One `.csv` file per table.
    Csv,
}

/// Where and how tables are written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub output_dir: PathBuf,
    /// Appended to every sheet name, typically the commodity or file label.
    pub sheet_suffix: Option<String>,
    pub format: OutputFormat,
    /// File stem of the workbook written in [`OutputFormat::Xlsx`].
    pub workbook_stem: String,
}

impl OutputOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            sheet_suffix: None,
            format: OutputFormat::default(),
            workbook_stem: DEFAULT_WORKBOOK_STEM.to_string(),
        }
    }

    #[must_use]
    pub fn with_sheet_suffix(mut self, suffix: Option<String>) -> Self {
        self.sheet_suffix = suffix;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_workbook_stem(mut self, stem: impl Into<String>) -> Self {
        self.workbook_stem = stem.into();
        self
    }

    /// Path of the workbook written in [`OutputFormat::Xlsx`].
    pub fn workbook_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.xlsx", file_stem(&self.workbook_stem)))
    }
}

/// A table that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub sheet_name: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// Writes one table as CSV with a header row.
///
/// Cells are written as display text, so numbers print the same whatever
/// else shares their column.
pub fn write_table_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let mut df = table_to_text_dataframe(table)?;
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), "wrote table");
    Ok(())
}

fn plan_csv(tables: &[ResultTable], options: &OutputOptions) -> Vec<(String, PathBuf)> {
    let mut used = BTreeSet::new();
    tables
        .iter()
        .map(|table| {
            let name = sheet_name(&table.title(), options.sheet_suffix.as_deref());
            let stem = file_stem(&name);
            let mut candidate = stem.clone();
            let mut counter = 2usize;
            while !used.insert(candidate.to_lowercase()) {
                candidate = format!("{stem} ({counter})");
                counter += 1;
            }
            let path = options.output_dir.join(format!("{candidate}.csv"));
            (name, path)
        })
        .collect()
}

fn plan_workbook(tables: &[ResultTable], options: &OutputOptions) -> Vec<(String, PathBuf)> {
    let names: Vec<String> = tables
        .iter()
        .map(|table| sheet_name(&table.title(), options.sheet_suffix.as_deref()))
        .collect();
    let path = options.workbook_path();
    unique_worksheet_names(names.iter().map(String::as_str))
        .into_iter()
        .map(|name| (name, path.clone()))
        .collect()
}

/// Plans sheet names and file paths without touching the file system.
///
/// For CSV, names that collide after truncation get ` (2)`, ` (3)`, ...
/// appended to the file stem. For a workbook every table shares the workbook
/// path and the worksheet name itself is made valid and unique.
pub fn plan_outputs(tables: &[ResultTable], options: &OutputOptions) -> Vec<(String, PathBuf)> {
    match options.format {
        OutputFormat::Csv => plan_csv(tables, options),
        OutputFormat::Xlsx => plan_workbook(tables, options),
    }
}

/// Writes every table into `options.output_dir`, creating it when needed.
pub fn write_tables(tables: &[ResultTable], options: &OutputOptions) -> Result<Vec<WrittenTable>> {
    std::fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("create {}", options.output_dir.display()))?;
    let planned = plan_outputs(tables, options);
    match options.format {
        OutputFormat::Csv => {
            for (table, (_, path)) in tables.iter().zip(&planned) {
                write_table_csv(table, path)?;
            }
        }
        OutputFormat::Xlsx => {
            let names: Vec<String> = planned.iter().map(|(name, _)| name.clone()).collect();
            write_workbook(tables, &names, &options.workbook_path())?;
        }
    }
    let written: Vec<WrittenTable> = tables
        .iter()
        .zip(planned)
        .map(|(table, (sheet_name, path))| WrittenTable {
            sheet_name,
            path,
            rows: table.row_count(),
        })
        .collect();
    info!(
        output_dir = %options.output_dir.display(),
        format = ?options.format,
        tables = written.len(),
        "outputs written"
    );
    Ok(written)
}
