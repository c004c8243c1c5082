//! Partitioning of a column range into (value, compliance, limit) blocks.

use residue_model::ParameterBlock;

/// Display name for a value-column header, or `None` for a blank header.
///
/// `suffix` is removed case-insensitively when present. A header that would
/// become blank by stripping keeps its original text.
pub fn parameter_name(header: &str, suffix: Option<&str>) -> Option<String> {
    let trimmed = header.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(suffix) = suffix.filter(|s| !s.is_empty()) else {
        return Some(trimmed.to_string());
    };
    let stem = strip_suffix_ignore_case(trimmed, suffix)
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(trimmed);
    Some(stem.to_string())
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let split = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Splits `[start, end)` into blocks of three columns.
///
/// `end` defaults to (and is clamped to) the column count. A trailing group of
/// one or two columns is dropped. Groups with a blank value header are
/// skipped without stopping the scan.
pub fn segment_blocks<S: AsRef<str>>(
    columns: &[S],
    start: usize,
    end: Option<usize>,
    suffix: Option<&str>,
) -> Vec<ParameterBlock> {
    let end = end.unwrap_or(columns.len()).min(columns.len());
    let mut blocks = Vec::new();
    let mut value = start;
    while value + ParameterBlock::WIDTH <= end {
        if let Some(name) = parameter_name(columns[value].as_ref(), suffix) {
            blocks.push(ParameterBlock::new(name, value));
        }
        value += ParameterBlock::WIDTH;
    }
    blocks
}
