//! CLI library components for the chart graph tool.

pub mod commands;
pub mod logging;
pub mod summary;
