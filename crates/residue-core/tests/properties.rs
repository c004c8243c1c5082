//! Property tests for segmentation and aggregation.

use proptest::prelude::*;

use residue_core::{aggregate, segment_blocks};
use residue_model::{CellValue, IdentifyingPositions, ParameterBlock, Sheet};

const COMMODITIES: [&str; 3] = ["Cumin", "Fennel", "Coriander"];

fn positions() -> IdentifyingPositions {
    IdentifyingPositions {
        commodity: 0,
        category: 1,
        variant: 2,
        sample_id: None,
    }
}

fn observation_sheet(rows: &[(usize, bool, Option<f64>)]) -> Sheet {
    let columns = ["Commodity", "Category", "Variant", "Ethion", "c", "l"]
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    let cells = rows
        .iter()
        .map(|&(commodity, is_unsafe, value)| {
            vec![
                CellValue::from(COMMODITIES[commodity]),
                CellValue::from("Organic"),
                CellValue::from("Whole"),
                value.map_or_else(|| CellValue::from("ND"), CellValue::Number),
                CellValue::from(if is_unsafe { "Unsafe" } else { "Safe" }),
                CellValue::from("0.01"),
            ]
        })
        .collect();
    Sheet::new(columns, cells)
}

proptest! {
    #[test]
    fn segment_emits_one_block_per_complete_triple(
        prefix in 0usize..5,
        groups in 0usize..12,
        remainder in 0usize..3,
    ) {
        let width = prefix + groups * 3 + remainder;
        let columns: Vec<String> = (0..width).map(|idx| format!("col{idx}")).collect();
        let blocks = segment_blocks(&columns, prefix, None, None);
        prop_assert_eq!(blocks.len(), groups);
        for block in &blocks {
            prop_assert!(block.limit() < width);
        }
    }

    #[test]
    fn segment_skips_blank_value_headers(names in prop::collection::vec(any::<bool>(), 0..30)) {
        let columns: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(idx, filled)| if *filled { format!("p{idx}") } else { "  ".to_string() })
            .collect();
        let expected = names
            .chunks_exact(ParameterBlock::WIDTH)
            .filter(|chunk| chunk[0])
            .count();
        prop_assert_eq!(segment_blocks(&columns, 0, None, None).len(), expected);
    }

    #[test]
    fn aggregation_ignores_row_order(
        (rows, shuffled) in prop::collection::vec(
            (0usize..3, any::<bool>(), prop::option::of(0.0f64..100.0)),
            0..40,
        )
        .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        let blocks = [ParameterBlock::new("Ethion", 3)];
        let original = observation_sheet(&rows);
        let permuted = observation_sheet(&shuffled);
        let all: Vec<usize> = (0..rows.len()).collect();
        let a = aggregate(&original, &positions(), &all, &blocks);
        let b = aggregate(&permuted, &positions(), &all, &blocks);
        prop_assert_eq!(a.len(), b.len());
        for record in a.records() {
            let other = b.get(&record.parameter, &record.commodity);
            prop_assert_eq!(Some(record), other);
            prop_assert!(record.unsafe_count <= record.total);
            prop_assert_eq!(record.min.is_some(), record.unsafe_count > 0);
        }
    }
}

#[test]
fn two_observations_one_unsafe() {
    let sheet = observation_sheet(&[(0, true, Some(5.0)), (0, false, Some(2.0))]);
    let blocks = [ParameterBlock::new("Ethion", 3)];
    let aggregation = aggregate(&sheet, &positions(), &[0, 1], &blocks);
    let record = aggregation.get("Ethion", "Cumin").expect("record");
    assert_eq!(record.total, 2);
    assert_eq!(record.unsafe_count, 1);
    assert_eq!(record.min, Some(5.0));
    assert_eq!(record.max, Some(5.0));
    assert_eq!(residue_core::format_percent(record.percent_unsafe()), "50.00%");
}
