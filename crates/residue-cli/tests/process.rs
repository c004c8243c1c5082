//! Integration tests for the file-level pipeline and its summaries.

use std::fs;
use std::path::{Path, PathBuf};

use residue_cli::pipeline::{inspect_file, process_file};
use residue_ingest::read_xlsx_sheet;
use residue_cli::summary::{layout_text, missing_marker_warnings, summary_table};
use residue_model::{CellValue, OutputMode, PipelineConfig, Region};
use residue_output::{OutputFormat, OutputOptions};

const SHEET: &str = "\
Sample ID,Commodity,Category,Variant,Monitoring_Off_Label_Pesticide_Starts,Ethion_value,Ethion_compliance,Ethion_limit,Monitoring_Banned_Pesticide_Starts,Endosulfan_value,Endosulfan_compliance,Endosulfan_limit
S1,Cumin,Organic,Whole,,5,Unsafe,0.01,,0.2,Unsafe,0.01
S2,Cumin,Organic,Whole,,2,Safe,0.01,,ND,Safe,0.01
S3,Fennel,Loose,Powder,,0.5,Unsafe,0.01,,,,
";

const NO_BANNED_SHEET: &str = "\
Sample ID,Commodity,Category,Variant,Monitoring_Off_Label_Pesticide_Starts,Ethion_value,Ethion_compliance,Ethion_limit
S1,Cumin,Organic,Whole,,5,Unsafe,0.01
";

fn write_sheet(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("cumin.csv");
    fs::write(&path, contents).expect("write sheet");
    path
}

#[test]
fn writes_one_file_per_group_and_region() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sheet(dir.path(), SHEET);
    let options = OutputOptions::new(dir.path().join("output"))
        .with_sheet_suffix(Some("Cumin".to_string()))
        .with_format(OutputFormat::Csv);

    let result = process_file(&input, None, &PipelineConfig::default(), &options, false)
        .expect("process file");

    assert_eq!(result.mode, OutputMode::Aggregate);
    let names: Vec<&str> = result
        .tables
        .iter()
        .map(|table| table.sheet_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Organic - Off-label Cumin",
            "Organic - Banned Cumin",
            "Loose - Off-label Cumin",
            "Loose - Banned Cumin",
        ]
    );
    for table in &result.tables {
        let path = table.path.as_ref().expect("written path");
        assert!(path.exists(), "{} missing", path.display());
    }

    let organic = fs::read_to_string(dir.path().join("output/Organic - Off-label Cumin.csv"))
        .expect("read organic table");
    let lines: Vec<&str> = organic.lines().collect();
    assert_eq!(
        lines,
        [
            "S.No,Parameter,Commodity,Min Unsafe Value,Max Unsafe Value,Unsafe Samples,Total Samples,% Unsafe",
            "1,Ethion,Cumin,5,5,1,2,50.00%",
        ]
    );

    let loose_banned = &result.tables[3];
    assert_eq!(loose_banned.region, Region::Banned);
    assert_eq!(loose_banned.rows, 0);
}

#[test]
fn default_output_is_one_workbook() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sheet(dir.path(), SHEET);
    let options = OutputOptions::new(dir.path().join("output"))
        .with_sheet_suffix(Some("Cumin".to_string()))
        .with_workbook_stem("cumin_report");

    let result = process_file(&input, None, &PipelineConfig::default(), &options, false)
        .expect("process file");

    let workbook = dir.path().join("output/cumin_report.xlsx");
    assert!(workbook.exists());
    assert!(
        result
            .tables
            .iter()
            .all(|table| table.path.as_deref() == Some(workbook.as_path()))
    );

    let organic = read_xlsx_sheet(&workbook, Some("Organic - Off-label Cumin"))
        .expect("read organic worksheet");
    assert_eq!(organic.row_count(), 1);
    assert_eq!(organic.cell(0, 1), &CellValue::Text("Ethion".to_string()));
    assert_eq!(organic.cell(0, 3).as_f64(), Some(5.0));
    assert_eq!(organic.cell(0, 7), &CellValue::Text("50.00%".to_string()));
}

#[test]
fn dry_run_plans_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sheet(dir.path(), SHEET);
    let output_dir = dir.path().join("output");
    let options = OutputOptions::new(&output_dir);

    let result = process_file(&input, None, &PipelineConfig::default(), &options, true)
        .expect("process file");

    assert!(result.dry_run);
    assert_eq!(result.tables.len(), 4);
    assert!(result.tables.iter().all(|table| table.path.is_none()));
    assert!(!output_dir.exists());

    let rendered = summary_table(&result.tables).to_string();
    assert!(rendered.contains("Organic - Off-label"));
    assert!(rendered.contains("TOTAL"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let options = OutputOptions::new(dir.path().join("output"));
    let error = process_file(
        &dir.path().join("absent.csv"),
        None,
        &PipelineConfig::default(),
        &options,
        false,
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn inspect_lists_markers_and_blocks() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sheet(dir.path(), SHEET);
    let result = inspect_file(&input, None, &PipelineConfig::default()).expect("inspect");
    assert_eq!(result.columns.len(), 12);

    let text = layout_text(&result.columns, &result.resolved);
    insta::assert_snapshot!(text, @r"
    Identifying: commodity #1, category #2, variant #3, sample id #0
    Off-label: marker #4 'Monitoring_Off_Label_Pesticide_Starts', columns 5..8, 1 block(s)
      Ethion: value #5, compliance #6, limit #7
    Banned: marker #8 'Monitoring_Banned_Pesticide_Starts', columns 9..12, 1 block(s)
      Endosulfan: value #9, compliance #10, limit #11
    ");
}

#[test]
fn unresolved_marker_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sheet(dir.path(), NO_BANNED_SHEET);
    let options = OutputOptions::new(dir.path().join("output"));

    let result = process_file(&input, None, &PipelineConfig::default(), &options, true)
        .expect("process file");

    let warnings = missing_marker_warnings(&result.report);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Banned marker 'Monitoring_Banned_Pesticide_Starts' not found"));
    assert!(warnings[0].contains("--banned-column"));

    let resolved = inspect_file(&input, None, &PipelineConfig::default())
        .expect("inspect")
        .resolved;
    let text = layout_text(&[], &resolved);
    assert!(text.ends_with("Banned: marker 'Monitoring_Banned_Pesticide_Starts' not found"));
}
