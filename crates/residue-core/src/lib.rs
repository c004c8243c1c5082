//! Extraction and aggregation engine for laboratory residue sheets.
//!
//! A pass runs leaf-first: [`resolver`] finds the identifying and marker
//! columns, [`segment`] cuts each region into parameter blocks, [`filter`]
//! selects rows per category group, [`aggregate`] rolls up unsafe
//! observations and [`report`] lays the results out as tables.
//! [`pipeline::process_sheet`] drives all of them from one [`PipelineConfig`].
//!
//! [`PipelineConfig`]: residue_model::PipelineConfig

pub mod aggregate;
pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod segment;

pub use aggregate::{Aggregation, aggregate, is_unsafe_verdict};
pub use filter::RowFilter;
pub use layout::{ResolvedLayout, resolve_layout};
pub use pipeline::process_sheet;
pub use report::{NO_RESIDUE, aggregate_table, format_percent, long_table, wide_table};
pub use resolver::{normalize_name, resolve_identifying, resolve_marker, resolve_selector};
pub use segment::{parameter_name, segment_blocks};
