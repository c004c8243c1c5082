//! CLI library components for the residue report tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
