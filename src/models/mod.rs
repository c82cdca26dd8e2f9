//! Data shapes produced by commands.

pub mod output;

pub use output::{PlayerSummary, ReportRow};
