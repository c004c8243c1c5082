//! Configuration for a residue sheet pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ResidueError, Result};

/// Default header of the column opening the off-label region.
pub const DEFAULT_OFF_LABEL_MARKER: &str = "Monitoring_Off_Label_Pesticide_Starts";
/// Default header of the column opening the banned region.
pub const DEFAULT_BANNED_MARKER: &str = "Monitoring_Banned_Pesticide_Starts";
/// Default suffix removed from value-column headers.
pub const DEFAULT_VALUE_SUFFIX: &str = "_value";

/// How a column is located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelector {
    /// Match by normalized header text.
    Name(String),
    /// Explicit 0-based column position.
    Index(usize),
}

impl ColumnSelector {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Normalization applied to header names before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMatch {
    /// Trimmed, case-folded comparison.
    CaseInsensitive,
    /// Case-folded comparison of the alphabetic characters only.
    #[default]
    LettersOnly,
}

/// Which region comes first, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionOrder {
    /// Decide from the resolved marker positions.
    #[default]
    Auto,
    OffLabelFirst,
    BannedFirst,
}

/// How a row's category is compared against a group's accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatch {
    /// Normalized category must equal an accepted value.
    #[default]
    Exact,
    /// Normalized category must contain an accepted value.
    Contains,
}

/// Shape of the assembled tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One row per sample and parameter.
    Long,
    /// One row per parameter and commodity with unsafe statistics.
    #[default]
    Aggregate,
    /// Filtered rows with identifying columns and the region's block columns.
    Wide,
}

impl OutputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Aggregate => "aggregate",
            Self::Wide => "wide",
        }
    }
}

/// Header names of the identifying columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifyingColumns {
    pub commodity: String,
    pub category: String,
    pub variant: String,
    /// Optional; rows are numbered from 1 when the column is absent.
    pub sample_id: Option<String>,
}

impl Default for IdentifyingColumns {
    fn default() -> Self {
        Self {
            commodity: "Commodity".to_string(),
            category: "Category".to_string(),
            variant: "Variant".to_string(),
            sample_id: Some("Sample ID".to_string()),
        }
    }
}

/// A named set of accepted category (and optionally variant) values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub variants: Option<Vec<String>>,
    #[serde(default)]
    pub matching: CategoryMatch,
}

impl CategoryGroup {
    pub fn new<I, S>(name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            variants: None,
            matching: CategoryMatch::Exact,
        }
    }

    #[must_use]
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_matching(mut self, matching: CategoryMatch) -> Self {
        self.matching = matching;
        self
    }

    pub fn organic() -> Self {
        Self::new("Organic", ["Organic"])
    }

    pub fn loose() -> Self {
        Self::new("Loose", ["Loose", "Normal"])
    }
}

/// Everything one sheet pass needs. Nothing is read from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub off_label_marker: ColumnSelector,
    pub banned_marker: ColumnSelector,
    pub marker_match: MarkerMatch,
    pub region_order: RegionOrder,
    pub columns: IdentifyingColumns,
    /// Suffix stripped from value headers; `None` keeps headers verbatim.
    pub value_suffix: Option<String>,
    pub groups: Vec<CategoryGroup>,
    pub mode: OutputMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            off_label_marker: ColumnSelector::name(DEFAULT_OFF_LABEL_MARKER),
            banned_marker: ColumnSelector::name(DEFAULT_BANNED_MARKER),
            marker_match: MarkerMatch::default(),
            region_order: RegionOrder::default(),
            columns: IdentifyingColumns::default(),
            value_suffix: Some(DEFAULT_VALUE_SUFFIX.to_string()),
            groups: vec![CategoryGroup::organic(), CategoryGroup::loose()],
            mode: OutputMode::default(),
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<CategoryGroup>) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, off_label: ColumnSelector, banned: ColumnSelector) -> Self {
        self.off_label_marker = off_label;
        self.banned_marker = banned;
        self
    }

    pub fn marker(&self, region: crate::Region) -> &ColumnSelector {
        match region {
            crate::Region::OffLabel => &self.off_label_marker,
            crate::Region::Banned => &self.banned_marker,
        }
    }

    /// Rejects configurations that cannot produce meaningful tables.
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(ResidueError::NoCategoryGroups);
        }
        for group in &self.groups {
            let has_category = group.categories.iter().any(|c| !c.trim().is_empty());
            let has_variant = group
                .variants
                .as_ref()
                .is_none_or(|variants| variants.iter().any(|v| !v.trim().is_empty()));
            if !has_category || !has_variant {
                return Err(ResidueError::EmptyCategoryGroup {
                    group: group.name.clone(),
                });
            }
        }
        Ok(())
    }
}
