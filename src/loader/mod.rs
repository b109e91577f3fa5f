//! Log ingestion.
//!
//! Reads newline-delimited JSON files into a [`RecordStore`]:
//! - the optional date filter is validated before any file is touched
//! - files are read in the order given, lines in file order
//! - malformed lines are reported on a diagnostics writer and skipped
//! - a missing file or an I/O error aborts the whole load

mod date_filter;
mod record;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, info, trace, warn};
use serde_json::{Map, Value};

use crate::error_handling::{AnalyzerError, LoadStats};

// Re-export public API
pub use date_filter::{timestamp_date, DateFilter};
pub use record::{LogRecord, RecordStore};

/// Result of a successful load.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub store: RecordStore,
    pub stats: LoadStats,
}

/// Loads every file in `paths`, writing parse diagnostics to `diagnostics`.
///
/// Nothing is returned unless every file was read to the end, so a failure
/// on the last file discards records already taken from earlier ones.
///
/// # Errors
///
/// - `AnalyzerError::InvalidDate` if `date_filter` is not `YYYY-MM-DD`
///   (checked before any path, even when `paths` is empty)
/// - `AnalyzerError::FileNotFound` if a path does not exist
/// - `AnalyzerError::Read` if an existing file cannot be opened or read
pub fn load_logs<P: AsRef<Path>>(
    paths: &[P],
    date_filter: Option<&str>,
    diagnostics: &mut dyn Write,
) -> Result<LoadOutcome, AnalyzerError> {
    let filter = date_filter.map(DateFilter::parse).transpose()?;
    if let Some(filter) = &filter {
        debug!("Filtering records to {}", filter.date());
    }

    let mut outcome = LoadOutcome::default();
    for path in paths {
        load_file(path.as_ref(), filter.as_ref(), diagnostics, &mut outcome)?;
    }

    Ok(outcome)
}

fn load_file(
    path: &Path,
    filter: Option<&DateFilter>,
    diagnostics: &mut dyn Write,
    outcome: &mut LoadOutcome,
) -> Result<(), AnalyzerError> {
    if !path.exists() {
        return Err(AnalyzerError::FileNotFound(path.to_path_buf()));
    }

    let read_error = |source: io::Error| AnalyzerError::Read {
        path: path.to_path_buf(),
        source,
    };

    info!("Reading {}", path.display());
    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);
    load_lines(path, reader, filter, diagnostics, outcome).map_err(read_error)?;
    outcome.stats.record_file();

    Ok(())
}

/// Parses each line of `reader`, appending accepted records to the store.
///
/// Only I/O failures are returned; the file handle is dropped by the caller
/// on either outcome.
fn load_lines<R: BufRead>(
    path: &Path,
    reader: R,
    filter: Option<&DateFilter>,
    diagnostics: &mut dyn Write,
    outcome: &mut LoadOutcome,
) -> io::Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = index + 1;
        outcome.stats.record_line();

        let line = line.trim();
        if line.is_empty() {
            outcome.stats.record_blank();
            continue;
        }

        let fields = match serde_json::from_str::<Map<String, Value>>(line) {
            Ok(fields) => fields,
            Err(e) => {
                outcome.stats.record_parse_error();
                debug!("Skipping line {} of {}: {}", line_num, path.display(), e);
                report_parse_error(diagnostics, path, line_num, &e);
                continue;
            }
        };

        let record = LogRecord::new(fields);
        if let Some(filter) = filter {
            if !filter.matches(&record) {
                trace!("Line {} of {} is outside {}", line_num, path.display(), filter.date());
                outcome.stats.record_filtered();
                continue;
            }
        }

        outcome.store.push(record);
        outcome.stats.record_loaded();
    }

    Ok(())
}

fn report_parse_error(
    diagnostics: &mut dyn Write,
    path: &Path,
    line_num: usize,
    error: &serde_json::Error,
) {
    // A broken diagnostics sink must not abort the load
    if let Err(e) = writeln!(
        diagnostics,
        "Ошибка парсинга JSON в файле {}, строка {}: {}",
        path.display(),
        line_num,
        error
    ) {
        warn!("Failed to write parse diagnostic: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn run(input: &str, filter: Option<&DateFilter>) -> (LoadOutcome, String) {
        let mut outcome = LoadOutcome::default();
        let mut diagnostics = Vec::new();
        load_lines(
            Path::new("access.log"),
            Cursor::new(input),
            filter,
            &mut diagnostics,
            &mut outcome,
        )
        .expect("in-memory reads do not fail");
        (outcome, String::from_utf8(diagnostics).expect("utf-8 diagnostics"))
    }

    #[test]
    fn test_blank_lines_are_skipped_silently() {
        let (outcome, diagnostics) = run("\n   \n{\"url\": \"/a\"}\n\t\n", None);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.stats.blank_lines(), 3);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let (outcome, diagnostics) = run("{\"valid\": \"json\"}\ninvalid json line\n{\"another\": 1}", None);
        assert_eq!(outcome.store.len(), 2);
        assert_eq!(outcome.stats.parse_errors(), 1);
        assert!(
            diagnostics.starts_with("Ошибка парсинга JSON в файле access.log, строка 2: "),
            "unexpected diagnostics: {diagnostics}"
        );
    }

    #[test]
    fn test_non_object_json_is_a_parse_error() {
        let (outcome, diagnostics) = run("[1, 2]\n42\n\"text\"\n{\"ok\": true}", None);
        assert_eq!(outcome.store.len(), 1);
        assert_eq!(outcome.stats.parse_errors(), 3);
        assert_eq!(diagnostics.lines().count(), 3);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let (_, diagnostics) = run("\n\n{broken", None);
        assert!(diagnostics.contains("строка 3:"), "unexpected diagnostics: {diagnostics}");
    }

    #[test]
    fn test_date_filter_drops_other_days() {
        let filter = DateFilter::parse("2025-06-22").expect("Should parse");
        let input = concat!(
            "{\"@timestamp\": \"2025-06-22T13:57:32+00:00\", \"url\": \"/a\"}\n",
            "{\"@timestamp\": \"2025-06-23T13:57:32+00:00\", \"url\": \"/b\"}\n",
            "{\"url\": \"/no-timestamp\"}\n",
            "{\"@timestamp\": \"2025-06-22T14:57:32+00:00\", \"url\": \"/c\"}\n",
        );
        let (outcome, diagnostics) = run(input, Some(&filter));

        let urls: Vec<_> = outcome.store.iter().filter_map(LogRecord::url).collect();
        assert_eq!(urls, vec!["/a", "/c"]);
        assert_eq!(outcome.stats.filtered_out(), 2);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_date_precedes_empty_path_list() {
        let paths: Vec<PathBuf> = Vec::new();
        let mut sink = Vec::new();
        let result = load_logs(&paths, Some("invalid-date"), &mut sink);
        assert!(matches!(result, Err(AnalyzerError::InvalidDate(ref d)) if d == "invalid-date"));
    }

    #[test]
    fn test_empty_path_list_loads_nothing() {
        let paths: Vec<PathBuf> = Vec::new();
        let mut sink = Vec::new();
        let outcome = load_logs(&paths, None, &mut sink).expect("Should load");
        assert!(outcome.store.is_empty());
        assert_eq!(outcome.stats.files_read(), 0);
    }
}
