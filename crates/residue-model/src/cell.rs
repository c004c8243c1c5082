//! Tagged cell values and their coercions.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Cells keep whatever shape the reader produced. Consumers convert them with
/// [`CellValue::as_f64`] and [`CellValue::as_text`] instead of relying on the
/// raw representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Missing,
}

impl CellValue {
    /// Builds a cell from raw reader text. Whitespace-only text becomes `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Returns true for `Missing` and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Single numeric coercion attempt. Non-finite results are rejected.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value).filter(|v| v.is_finite()),
            Self::Text(text) => parse_f64(text),
            Self::Missing => None,
        }
    }

    /// Display text for the cell. `Missing` renders as an empty string.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }

    /// Trimmed, lower-cased text used for case-insensitive comparisons.
    pub fn normalized_text(&self) -> String {
        self.as_text().trim().to_lowercase()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::from_raw(&value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

/// Parses a string as a finite `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
