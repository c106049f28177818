//! Output formatting module
//!
//! Renders the team removal report as table, CSV, JSON or YAML.

pub mod common;
pub mod removal;

pub use removal::output_removal_report;
