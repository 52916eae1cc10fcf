//! CLI library components for the migration analysis.

pub mod logging;
pub mod pipeline;
