//! CLI library components for the water quality tool.

pub mod ingest;
pub mod logging;
pub mod summary;
