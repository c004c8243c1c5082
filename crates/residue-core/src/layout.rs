//! Computes the per-sheet layout: identifying columns, markers and regions.

use tracing::{debug, warn};

use residue_model::{
    MissingMarker, PipelineConfig, Region, RegionOrder, RegionSpan, ResidueError, Result,
    SheetLayout,
};

use crate::resolver::{resolve_identifying, resolve_selector};
use crate::segment::segment_blocks;

/// A layout plus the markers that could not be found.
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    pub layout: SheetLayout,
    pub missing_markers: Vec<MissingMarker>,
}

/// Resolves everything position-based once, before any row is read.
///
/// A region starts right after its marker and ends at the other marker when
/// that lies further right, otherwise at the last column. A region whose
/// marker is missing is absent from the layout and listed in
/// `missing_markers`.
pub fn resolve_layout<S: AsRef<str>>(
    columns: &[S],
    config: &PipelineConfig,
) -> Result<ResolvedLayout> {
    let mode = config.marker_match;
    let identifying = resolve_identifying(columns, &config.columns, mode)?;
    let off_label = resolve_selector(columns, &config.off_label_marker, mode)?;
    let banned = resolve_selector(columns, &config.banned_marker, mode)?;

    let mut missing_markers = Vec::new();
    for (region, position) in [(Region::OffLabel, off_label), (Region::Banned, banned)] {
        if position.is_none() {
            let selector = config.marker(region).to_string();
            warn!(region = %region, marker = %selector, "marker column not found");
            missing_markers.push(MissingMarker { region, selector });
        }
    }

    if let (Some(off), Some(ban)) = (off_label, banned) {
        check_order(config.region_order, off, ban)?;
    }

    let suffix = config.value_suffix.as_deref();
    let span = |region: Region, marker: Option<usize>, other: Option<usize>| {
        marker.map(|marker| {
            let start = marker + 1;
            let end = other
                .filter(|&other| other > marker)
                .unwrap_or(columns.len());
            let blocks = segment_blocks(columns, start, Some(end), suffix);
            debug!(
                region = %region,
                marker,
                start,
                end,
                blocks = blocks.len(),
                "resolved region"
            );
            RegionSpan {
                region,
                marker,
                start,
                end,
                blocks,
            }
        })
    };

    let layout = SheetLayout {
        identifying,
        off_label: span(Region::OffLabel, off_label, banned),
        banned: span(Region::Banned, banned, off_label),
    };
    Ok(ResolvedLayout {
        layout,
        missing_markers,
    })
}

fn check_order(expected: RegionOrder, off_label: usize, banned: usize) -> Result<()> {
    if off_label == banned {
        return Err(ResidueError::MarkersCoincide { index: off_label });
    }
    let consistent = match expected {
        RegionOrder::Auto => true,
        RegionOrder::OffLabelFirst => off_label < banned,
        RegionOrder::BannedFirst => banned < off_label,
    };
    if consistent {
        Ok(())
    } else {
        Err(ResidueError::RegionOrderMismatch {
            expected,
            off_label,
            banned,
        })
    }
}
