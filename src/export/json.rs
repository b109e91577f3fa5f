//! JSON rendering.
//!
//! Writes the whole report as one pretty-printed array, one object per row,
//! keys in column order.

use log::error;

use crate::report::ReportRow;

/// Renders `rows` as a JSON array. An empty report renders as `[]`.
pub fn format_json(rows: &[ReportRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|e| {
        // Rows only hold strings and numbers; this path is not expected
        error!("Failed to serialize report rows: {}", e);
        "[]".to_string()
    })
}
