//! Parameter blocks and resolved sheet layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column region holding one class of tested substances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    OffLabel,
    Banned,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::OffLabel, Region::Banned];

    /// Human-readable label used in table and sheet names.
    pub fn label(self) -> &'static str {
        match self {
            Self::OffLabel => "Off-label",
            Self::Banned => "Banned",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contiguous (value, compliance, limit) column triple for one substance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBlock {
    /// Display name derived from the value-column header.
    pub name: String,
    /// Position of the value column; compliance and limit follow it.
    pub value: usize,
}

impl ParameterBlock {
    pub const WIDTH: usize = 3;

    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn compliance(&self) -> usize {
        self.value + 1
    }

    pub fn limit(&self) -> usize {
        self.value + 2
    }

    pub fn positions(&self) -> [usize; 3] {
        [self.value, self.compliance(), self.limit()]
    }
}

/// Half-open column range `[start, end)` of one region and its blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSpan {
    pub region: Region,
    /// Position of the marker column that opens the region.
    pub marker: usize,
    pub start: usize,
    pub end: usize,
    pub blocks: Vec<ParameterBlock>,
}

impl RegionSpan {
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Positions of the identifying columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyingPositions {
    pub commodity: usize,
    pub category: usize,
    pub variant: usize,
    pub sample_id: Option<usize>,
}

/// Everything resolved once per sheet before rows are visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub identifying: IdentifyingPositions,
    pub off_label: Option<RegionSpan>,
    pub banned: Option<RegionSpan>,
}

impl SheetLayout {
    pub fn region(&self, region: Region) -> Option<&RegionSpan> {
        match region {
            Region::OffLabel => self.off_label.as_ref(),
            Region::Banned => self.banned.as_ref(),
        }
    }
}
