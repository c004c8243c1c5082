use thiserror::Error;

use crate::RegionOrder;

/// Configuration and layout errors raised before any row is processed.
#[derive(Debug, Error)]
pub enum ResidueError {
    #[error("required {role} column '{name}' not found")]
    MissingColumn { role: &'static str, name: String },
    #[error("column index {index} out of range for sheet with {len} columns")]
    InvalidColumnIndex { index: usize, len: usize },
    #[error("off-label and banned markers both resolve to column {index}")]
    MarkersCoincide { index: usize },
    #[error(
        "region order {expected:?} contradicts marker positions (off-label at {off_label}, banned at {banned})"
    )]
    RegionOrderMismatch {
        expected: RegionOrder,
        off_label: usize,
        banned: usize,
    },
    #[error("category group '{group}' has no accepted values")]
    EmptyCategoryGroup { group: String },
    #[error("no category groups configured")]
    NoCategoryGroups,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ResidueError>;
