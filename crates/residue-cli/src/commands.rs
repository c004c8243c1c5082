use anyhow::Result;

use residue_cli::config::{ConfigOverrides, marker_selector, resolve_config};
use residue_cli::pipeline::{default_output_dir, default_workbook_stem, inspect_file, process_file};
use residue_cli::types::{InspectResult, ProcessResult};
use residue_output::OutputOptions;

use crate::cli::{InspectArgs, MarkerArgs, ProcessArgs};

fn marker_overrides(markers: &MarkerArgs) -> ConfigOverrides {
    ConfigOverrides {
        mode: None,
        off_label_marker: marker_selector(
            markers.offlabel_marker.as_deref(),
            markers.offlabel_column,
        ),
        banned_marker: marker_selector(markers.banned_marker.as_deref(), markers.banned_column),
    }
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let overrides = ConfigOverrides {
        mode: args.mode.map(Into::into),
        ..marker_overrides(&args.markers)
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let options = OutputOptions::new(output_dir)
        .with_sheet_suffix(args.commodity_label.clone())
        .with_format(args.format.into())
        .with_workbook_stem(default_workbook_stem(&args.input));
    process_file(
        &args.input,
        args.sheet.as_deref(),
        &config,
        &options,
        args.dry_run,
    )
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let config = resolve_config(args.config.as_deref(), &marker_overrides(&args.markers))?;
    inspect_file(&args.input, args.sheet.as_deref(), &config)
}
