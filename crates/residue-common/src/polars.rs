//! Polars AnyValue utility functions.
//!
//! This module converts between Polars `AnyValue`s and [`CellValue`] cells in
//! both directions.

use polars::prelude::*;

use residue_model::{CellValue, format_numeric, parse_f64};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use residue_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(0.50)), "0.5");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Converts an `AnyValue` into a tagged cell.
///
/// Numeric values become [`CellValue::Number`], text is trimmed, and nulls or
/// blank strings become [`CellValue::Missing`].
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::String(s) => CellValue::from_raw(s),
        AnyValue::StringOwned(s) => CellValue::from_raw(&s),
        AnyValue::Int8(_)
        | AnyValue::Int16(_)
        | AnyValue::Int32(_)
        | AnyValue::Int64(_)
        | AnyValue::UInt8(_)
        | AnyValue::UInt16(_)
        | AnyValue::UInt32(_)
        | AnyValue::UInt64(_)
        | AnyValue::Float32(_)
        | AnyValue::Float64(_) => match any_to_f64(value) {
            Some(number) => CellValue::Number(number),
            None => CellValue::Missing,
        },
        other => CellValue::from_raw(&other.to_string()),
    }
}

/// Builds a Polars column from cells.
///
/// Columns holding only numbers (and gaps) become `Float64`; anything else
/// becomes a `String` column with blanks as nulls.
pub fn cell_column(name: &str, cells: &[CellValue]) -> Column {
    let has_number = cells.iter().any(|cell| matches!(cell, CellValue::Number(_)));
    let all_numeric = cells
        .iter()
        .all(|cell| matches!(cell, CellValue::Number(_) | CellValue::Missing));
    if has_number && all_numeric {
        let values: Vec<Option<f64>> = cells.iter().map(CellValue::as_f64).collect();
        Series::new(name.into(), values).into_column()
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|cell| (!cell.is_blank()).then(|| cell.as_text()))
            .collect();
        Series::new(name.into(), values).into_column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::String("2.5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("ND")), None);
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn test_any_to_cell() {
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::String("  ")), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Int64(3)), CellValue::Number(3.0));
        assert_eq!(
            any_to_cell(AnyValue::String(" Unsafe ")),
            CellValue::Text("Unsafe".to_string())
        );
    }

    #[test]
    fn test_cell_column_types() {
        let numeric = cell_column(
            "Min",
            &[CellValue::Number(1.0), CellValue::Missing, CellValue::Number(2.5)],
        );
        assert_eq!(numeric.dtype(), &DataType::Float64);
        assert_eq!(numeric.null_count(), 1);

        let text = cell_column(
            "Max",
            &[CellValue::Number(1.0), CellValue::from("No Residue")],
        );
        assert_eq!(text.dtype(), &DataType::String);
        assert_eq!(text.len(), 2);
    }
}
