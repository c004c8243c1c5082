pub mod aggregate;
pub mod block;
pub mod cell;
pub mod error;
pub mod options;
pub mod sheet;
pub mod table;

pub use aggregate::AggregateRecord;
pub use block::{IdentifyingPositions, ParameterBlock, Region, RegionSpan, SheetLayout};
pub use cell::{CellValue, format_numeric, parse_f64};
pub use error::{ResidueError, Result};
pub use options::{
    CategoryGroup, CategoryMatch, ColumnSelector, DEFAULT_BANNED_MARKER,
    DEFAULT_OFF_LABEL_MARKER, DEFAULT_VALUE_SUFFIX, IdentifyingColumns, MarkerMatch,
    OutputMode, PipelineConfig, RegionOrder,
};
pub use sheet::Sheet;
pub use table::{MissingMarker, ResultTable, SheetReport};
