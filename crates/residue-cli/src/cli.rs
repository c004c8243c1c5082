//! CLI argument definitions for the residue report tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use residue_model::OutputMode;
use residue_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "residue",
    version,
    about = "Pesticide residue reports - Summarize off-label and banned monitoring sheets",
    long_about = "Summarize laboratory pesticide residue sheets.\n\n\
                  Splits each sheet at its off-label and banned marker columns, filters\n\
                  samples by category group and writes one worksheet (or CSV file) per\n\
                  group and region."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a residue sheet and write one table per group and region.
    Process(ProcessArgs),

    /// Show the columns, markers and parameter blocks found in a sheet.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Residue sheet: a CSV file or a workbook (.xlsx, .xlsm, .xlsb, .xls, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read from a workbook input (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output container.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: FormatArg,

    /// Output directory for generated tables (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Table shape (overrides the config file).
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub markers: MarkerArgs,

    /// Text appended to every sheet name, e.g. the commodity.
    #[arg(long = "commodity-label", value_name = "TEXT")]
    pub commodity_label: Option<String>,

    /// Build and summarize tables without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Residue sheet: a CSV file or a workbook.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read from a workbook input (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub markers: MarkerArgs,
}

/// Manual marker selection, by header name or by 0-based column position.
#[derive(Parser)]
pub struct MarkerArgs {
    /// Header of the column that opens the off-label region.
    #[arg(long = "offlabel-marker", value_name = "NAME", conflicts_with = "offlabel_column")]
    pub offlabel_marker: Option<String>,

    /// 0-based position of the off-label marker column.
    #[arg(long = "offlabel-column", value_name = "N")]
    pub offlabel_column: Option<usize>,

    /// Header of the column that opens the banned region.
    #[arg(long = "banned-marker", value_name = "NAME", conflicts_with = "banned_column")]
    pub banned_marker: Option<String>,

    /// 0-based position of the banned marker column.
    #[arg(long = "banned-column", value_name = "N")]
    pub banned_column: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Long,
    Aggregate,
    Wide,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Long => OutputMode::Long,
            ModeArg::Aggregate => OutputMode::Aggregate,
            ModeArg::Wide => OutputMode::Wide,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// One workbook with a worksheet per table.
    Xlsx,
    /// One CSV file per table.
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
