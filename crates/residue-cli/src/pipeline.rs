//! File-level stages: ingest, sheet pass, output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use residue_core::{process_sheet, resolve_layout};
use residue_ingest::read_sheet;
use residue_model::{PipelineConfig, ResultTable};
use residue_output::{DEFAULT_WORKBOOK_STEM, OutputOptions, WrittenTable, plan_outputs, write_tables};

use crate::types::{InspectResult, ProcessResult, TableSummary};

/// `<input dir>/output`, or `./output` for a bare file name.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

/// `<input stem>_report`, the workbook name for `input`.
pub fn default_workbook_stem(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.trim().is_empty())
        .map_or_else(
            || DEFAULT_WORKBOOK_STEM.to_string(),
            |stem| format!("{stem}_report"),
        )
}

/// Reads `input`, runs the sheet pass and, unless `dry_run`, writes every table.
///
/// `worksheet` picks the sheet of a workbook input. Files are written only
/// after the whole report has been built.
pub fn process_file(
    input: &Path,
    worksheet: Option<&str>,
    config: &PipelineConfig,
    options: &OutputOptions,
    dry_run: bool,
) -> Result<ProcessResult> {
    let file_span = info_span!("process_file", input = %input.display());
    let _guard = file_span.enter();

    let sheet =
        read_sheet(input, worksheet).with_context(|| format!("read {}", input.display()))?;
    let report =
        process_sheet(&sheet, config).with_context(|| format!("process {}", input.display()))?;

    let tables = if dry_run {
        info!(tables = report.tables.len(), "dry run, skipping output");
        plan_outputs(&report.tables, options)
            .into_iter()
            .zip(&report.tables)
            .map(|((sheet_name, _), table)| summarize(table, sheet_name, None))
            .collect()
    } else {
        write_tables(&report.tables, options)?
            .into_iter()
            .zip(&report.tables)
            .map(|(written, table)| {
                let WrittenTable {
                    sheet_name, path, ..
                } = written;
                summarize(table, sheet_name, Some(path))
            })
            .collect()
    };

    Ok(ProcessResult {
        input: input.to_path_buf(),
        output_dir: options.output_dir.clone(),
        mode: config.mode,
        dry_run,
        report,
        tables,
    })
}

fn summarize(table: &ResultTable, sheet_name: String, path: Option<PathBuf>) -> TableSummary {
    TableSummary {
        sheet_name,
        group: table.group.clone(),
        region: table.region,
        rows: table.row_count(),
        path,
    }
}

/// Reads `input` and resolves its layout without processing any row.
pub fn inspect_file(
    input: &Path,
    worksheet: Option<&str>,
    config: &PipelineConfig,
) -> Result<InspectResult> {
    let sheet =
        read_sheet(input, worksheet).with_context(|| format!("read {}", input.display()))?;
    let resolved = resolve_layout(sheet.columns(), config)
        .with_context(|| format!("resolve layout of {}", input.display()))?;
    Ok(InspectResult {
        input: input.to_path_buf(),
        columns: sheet.columns().to_vec(),
        resolved,
    })
}
