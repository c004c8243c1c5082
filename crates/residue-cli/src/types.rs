use std::path::PathBuf;

use residue_core::ResolvedLayout;
use residue_model::{OutputMode, Region, SheetReport};

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mode: OutputMode,
    pub dry_run: bool,
    pub report: SheetReport,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub sheet_name: String,
    pub group: String,
    pub region: Region,
    pub rows: usize,
    /// `None` when nothing was written.
    pub path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InspectResult {
    pub input: PathBuf,
    pub columns: Vec<String>,
    pub resolved: ResolvedLayout,
}
