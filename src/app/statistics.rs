//! Load statistics logging.

use log::info;

use crate::error_handling::LoadStats;

/// Logs a summary of a finished load at `info` level.
///
/// Zero counters for blank lines, parse errors and filtered records are
/// omitted to keep the common case to one line.
pub fn log_load_summary(stats: &LoadStats) {
    info!(
        "Loaded {} record{} from {} file{} ({} lines read)",
        stats.records_loaded(),
        if stats.records_loaded() == 1 { "" } else { "s" },
        stats.files_read(),
        if stats.files_read() == 1 { "" } else { "s" },
        stats.lines_read()
    );

    if stats.blank_lines() > 0 {
        info!("   Blank lines skipped: {}", stats.blank_lines());
    }
    if stats.parse_errors() > 0 {
        info!("   Malformed lines skipped: {}", stats.parse_errors());
    }
    if stats.filtered_out() > 0 {
        info!("   Records outside date filter: {}", stats.filtered_out());
    }
}
