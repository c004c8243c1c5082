//! Tests for residue-model types.

use residue_model::{
    CategoryGroup, CategoryMatch, CellValue, ColumnSelector, OutputMode, PipelineConfig, Region,
    ResultTable,
};

#[test]
fn config_serializes() {
    let config = PipelineConfig::default().with_mode(OutputMode::Long);
    let json = serde_json::to_string(&config).expect("serialize config");
    let round: PipelineConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}

#[test]
fn partial_config_uses_defaults() {
    let json = r#"{
        "mode": "wide",
        "banned_marker": { "index": 12 },
        "groups": [
            { "name": "Organic", "categories": ["organic"], "matching": "contains" }
        ]
    }"#;
    let config: PipelineConfig = serde_json::from_str(json).expect("deserialize config");
    assert_eq!(config.mode, OutputMode::Wide);
    assert_eq!(config.banned_marker, ColumnSelector::Index(12));
    assert_eq!(config.off_label_marker, PipelineConfig::default().off_label_marker);
    assert_eq!(config.groups[0].matching, CategoryMatch::Contains);
    assert_eq!(config.columns.commodity, "Commodity");
    assert_eq!(config.value_suffix.as_deref(), Some("_value"));
}

#[test]
fn result_table_title() {
    let mut table = ResultTable::new(
        CategoryGroup::organic().name,
        Region::OffLabel,
        vec!["Parameter".to_string()],
    );
    table.push_row(vec![CellValue::from("Chlorpyrifos")]);
    assert_eq!(table.title(), "Organic - Off-label");
    assert_eq!(table.row_count(), 1);
}

#[test]
fn cell_serializes_tagged() {
    let json = serde_json::to_string(&CellValue::Number(2.5)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Number","value":2.5}"#);
}
