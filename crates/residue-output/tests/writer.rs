use std::fs;

use residue_ingest::read_xlsx_sheet;
use residue_model::{CellValue, Region, ResultTable};
use residue_output::{OutputFormat, OutputOptions, plan_outputs, write_tables};

fn aggregate_table(group: &str, region: Region) -> ResultTable {
    let mut table = ResultTable::new(
        group,
        region,
        ["S.No", "Parameter", "Commodity", "% Unsafe"]
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
    );
    table.push_row(vec![
        CellValue::from(1usize),
        CellValue::from("Ethion"),
        CellValue::from("Cumin"),
        CellValue::from("50.00%"),
    ]);
    table
}

#[test]
fn writes_one_csv_per_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let tables = vec![
        aggregate_table("Organic", Region::OffLabel),
        aggregate_table("Organic", Region::Banned),
    ];
    let options = OutputOptions::new(dir.path().join("out"))
        .with_sheet_suffix(Some("Cumin".into()))
        .with_format(OutputFormat::Csv);
    let written = write_tables(&tables, &options).expect("write tables");
    assert_eq!(written.len(), 2);
    assert_eq!(written[0].sheet_name, "Organic - Off-label Cumin");
    assert_eq!(written[1].rows, 1);

    let contents = fs::read_to_string(&written[0].path).expect("read output");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("S.No,Parameter,Commodity,% Unsafe"));
    assert_eq!(lines.next(), Some("1,Ethion,Cumin,50.00%"));
}

#[test]
fn csv_numbers_do_not_depend_on_their_column() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut table = ResultTable::new(
        "Organic",
        Region::OffLabel,
        vec!["Min".to_string(), "Max".to_string()],
    );
    table.push_row(vec![CellValue::Number(0.5), CellValue::Number(0.1 + 0.2)]);
    table.push_row(vec![CellValue::Number(5.0), CellValue::Number(1e-7)]);
    let options = OutputOptions::new(dir.path()).with_format(OutputFormat::Csv);
    let written = write_tables(&[table], &options).expect("write tables");

    let contents = fs::read_to_string(&written[0].path).expect("read output");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, ["Min,Max", "0.5,0.30000000000000004", "5,0.0000001"]);
}

#[test]
fn colliding_sheet_names_get_distinct_files() {
    let tables = vec![
        aggregate_table("Organic", Region::OffLabel),
        aggregate_table("Organic", Region::OffLabel),
    ];
    let options = OutputOptions::new("out").with_format(OutputFormat::Csv);
    let planned = plan_outputs(&tables, &options);
    assert_eq!(planned[0].0, planned[1].0);
    assert_ne!(planned[0].1, planned[1].1);
    assert!(planned[1].1.ends_with("Organic - Off-label (2).csv"));
}

#[test]
fn workbook_gets_one_worksheet_per_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let empty = ResultTable::new(
        "Loose",
        Region::Banned,
        vec!["S.No".to_string(), "Parameter".to_string()],
    );
    let tables = vec![aggregate_table("Organic", Region::OffLabel), empty];
    let options = OutputOptions::new(dir.path().join("out"))
        .with_sheet_suffix(Some("Cumin".into()))
        .with_workbook_stem("cumin_report");
    let written = write_tables(&tables, &options).expect("write workbook");

    let path = dir.path().join("out/cumin_report.xlsx");
    assert!(written.iter().all(|table| table.path == path));
    assert_eq!(written[1].sheet_name, "Loose - Banned Cumin");

    let organic = read_xlsx_sheet(&path, Some("Organic - Off-label Cumin")).expect("read sheet");
    assert_eq!(organic.columns(), ["S.No", "Parameter", "Commodity", "% Unsafe"]);
    assert_eq!(organic.cell(0, 0), &CellValue::Number(1.0));
    assert_eq!(organic.cell(0, 3), &CellValue::Text("50.00%".to_string()));

    let loose = read_xlsx_sheet(&path, Some("Loose - Banned Cumin")).expect("read sheet");
    assert_eq!(loose.columns(), ["S.No", "Parameter"]);
    assert_eq!(loose.row_count(), 0);
}

#[test]
fn workbook_sheet_names_collide_without_case() {
    let tables = vec![
        aggregate_table("Organic", Region::OffLabel),
        aggregate_table("ORGANIC", Region::OffLabel),
    ];
    let planned = plan_outputs(&tables, &OutputOptions::new("out"));
    assert_eq!(planned[0].0, "Organic - Off-label");
    assert_eq!(planned[1].0, "ORGANIC - Off-label (2)");
    assert_eq!(planned[0].1, planned[1].1);
    assert!(planned[0].1.ends_with("residue_report.xlsx"));
}
