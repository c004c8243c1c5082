//! Sheet and file naming for result tables.

use std::collections::BTreeSet;

/// Longest sheet name a workbook accepts.
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// `"{title} {suffix}"` cut to [`MAX_SHEET_NAME_CHARS`] characters.
pub fn sheet_name(title: &str, suffix: Option<&str>) -> String {
    let full = match suffix.map(str::trim).filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{title} {suffix}"),
        None => title.to_string(),
    };
    full.chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Replaces characters that are not allowed in file names with `_`.
pub fn file_stem(sheet_name: &str) -> String {
    sheet_name
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}

/// Replaces characters a worksheet name may not contain with `_`.
///
/// Leading and trailing apostrophes are dropped and an empty result becomes
/// `Sheet`.
pub fn worksheet_name(sheet_name: &str) -> String {
    let replaced: String = sheet_name
        .chars()
        .map(|ch| match ch {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();
    let trimmed = replaced.trim_matches('\'').trim();
    if trimmed.is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.chars().take(MAX_SHEET_NAME_CHARS).collect()
    }
}

/// Valid worksheet names, unique without regard to case.
///
/// Repeats get ` (2)`, ` (3)`, ... with the base shortened so the result still
/// fits in [`MAX_SHEET_NAME_CHARS`].
pub fn unique_worksheet_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .map(|name| {
            let base = worksheet_name(name);
            let mut candidate = base.clone();
            let mut counter = 2usize;
            while !seen.insert(candidate.to_lowercase()) {
                let suffix = format!(" ({counter})");
                let keep = MAX_SHEET_NAME_CHARS - suffix.chars().count();
                let head: String = base.chars().take(keep).collect();
                candidate = format!("{}{suffix}", head.trim_end());
                counter += 1;
            }
            candidate
        })
        .collect()
}

/// Makes names unique by appending `_2`, `_3`, ... to repeats.
pub fn unique_names(names: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut counter = 2usize;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{name}_{counter}");
            counter += 1;
        }
        unique.push(candidate);
    }
    unique
}
