//! CLI library components for the inventory spreadsheet validator.

pub mod logging;
pub mod pipeline;
pub mod report;
