//! CLI library components for the publication DOI batch tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
