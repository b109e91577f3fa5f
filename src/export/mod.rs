//! Report output rendering.
//!
//! This module turns aggregated rows into text for stdout, either as a
//! bordered grid (default) or as a JSON array.

mod json;
mod table;

pub use json::format_json;
pub use table::format_table;

use crate::config::OutputFormat;
use crate::report::ReportRow;

/// Renders `rows` in the requested format.
pub fn render<H: AsRef<str>>(rows: &[ReportRow], headers: &[H], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_table(rows, headers),
        OutputFormat::Json => format_json(rows),
    }
}
