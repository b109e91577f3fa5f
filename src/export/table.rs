//! Bordered text-grid rendering.
//!
//! Produces output in the style of a `grid` table:
//!
//! ```text
//! +------------+-------+-------------------+
//! | handler    | total | avg_response_time |
//! +------------+-------+-------------------+
//! | /api/test1 | 10    | 0.1               |
//! +------------+-------+-------------------+
//! ```

use crate::config::MSG_NO_TABLE_DATA;
use crate::report::ReportRow;

/// Renders `rows` under `headers` as an aligned grid.
///
/// Each header is looked up in a row as lower-case with spaces replaced by
/// underscores, so a `Avg Response Time` header reads the
/// `avg_response_time` cell. Missing cells render empty. Widths are measured
/// in characters, not bytes.
///
/// Returns [`MSG_NO_TABLE_DATA`] when `rows` is empty.
pub fn format_table<H: AsRef<str>>(rows: &[ReportRow], headers: &[H]) -> String {
    if rows.is_empty() {
        return MSG_NO_TABLE_DATA.to_string();
    }

    let headers: Vec<&str> = headers.iter().map(AsRef::as_ref).collect();
    let keys: Vec<String> = headers.iter().map(|h| row_key(h)).collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            keys.iter()
                .map(|key| row.get(key).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut lines = Vec::with_capacity(cells.len() + 4);
    lines.push(separator.clone());
    lines.push(line(&headers, &widths));
    lines.push(separator.clone());
    for row in &cells {
        lines.push(line(row, &widths));
    }
    lines.push(separator);

    lines.join("\n")
}

/// Row key for a column header.
fn row_key(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}

fn border(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let segments: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {:<width$} ", cell.as_ref(), width = width))
        .collect();
    format!("|{}|", segments.join("|"))
}
