//! Column lookup by normalized header name.

use residue_model::{
    ColumnSelector, IdentifyingColumns, IdentifyingPositions, MarkerMatch, ResidueError, Result,
};

/// Normalized comparison key for a header name.
pub fn normalize_name(name: &str, mode: MarkerMatch) -> String {
    let folded = name.trim().to_lowercase();
    match mode {
        MarkerMatch::CaseInsensitive => folded,
        MarkerMatch::LettersOnly => folded.chars().filter(|ch| ch.is_alphabetic()).collect(),
    }
}

/// Position of the first column whose key equals the marker's key.
///
/// Blank markers and blank headers never match.
pub fn resolve_marker<S: AsRef<str>>(
    columns: &[S],
    marker: &str,
    mode: MarkerMatch,
) -> Option<usize> {
    let key = normalize_name(marker, mode);
    if key.is_empty() {
        return None;
    }
    columns
        .iter()
        .position(|column| normalize_name(column.as_ref(), mode) == key)
}

/// Resolves a selector. A by-name miss is `Ok(None)`; an index past the end is an error.
pub fn resolve_selector<S: AsRef<str>>(
    columns: &[S],
    selector: &ColumnSelector,
    mode: MarkerMatch,
) -> Result<Option<usize>> {
    match selector {
        ColumnSelector::Name(name) => Ok(resolve_marker(columns, name, mode)),
        ColumnSelector::Index(index) if *index < columns.len() => Ok(Some(*index)),
        ColumnSelector::Index(index) => Err(ResidueError::InvalidColumnIndex {
            index: *index,
            len: columns.len(),
        }),
    }
}

fn require<S: AsRef<str>>(
    columns: &[S],
    role: &'static str,
    name: &str,
    mode: MarkerMatch,
) -> Result<usize> {
    resolve_marker(columns, name, mode).ok_or_else(|| ResidueError::MissingColumn {
        role,
        name: name.to_string(),
    })
}

/// Locates commodity, category, variant and the optional sample id column.
pub fn resolve_identifying<S: AsRef<str>>(
    columns: &[S],
    names: &IdentifyingColumns,
    mode: MarkerMatch,
) -> Result<IdentifyingPositions> {
    Ok(IdentifyingPositions {
        commodity: require(columns, "commodity", &names.commodity, mode)?,
        category: require(columns, "category", &names.category, mode)?,
        variant: require(columns, "variant", &names.variant, mode)?,
        sample_id: names
            .sample_id
            .as_deref()
            .and_then(|name| resolve_marker(columns, name, mode)),
    })
}
