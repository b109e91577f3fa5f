//! Load statistics tracking.

/// Counters collected while loading log files.
///
/// The loader runs on a single thread, so plain integers are enough.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    files_read: usize,
    lines_read: usize,
    blank_lines: usize,
    parse_errors: usize,
    filtered_out: usize,
    records_loaded: usize,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_file(&mut self) {
        self.files_read += 1;
    }

    pub(crate) fn record_line(&mut self) {
        self.lines_read += 1;
    }

    pub(crate) fn record_blank(&mut self) {
        self.blank_lines += 1;
    }

    pub(crate) fn record_parse_error(&mut self) {
        self.parse_errors += 1;
    }

    pub(crate) fn record_filtered(&mut self) {
        self.filtered_out += 1;
    }

    pub(crate) fn record_loaded(&mut self) {
        self.records_loaded += 1;
    }

    /// Number of files fully read.
    pub fn files_read(&self) -> usize {
        self.files_read
    }

    /// Number of physical lines read, blank ones included.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    /// Number of lines dropped because they were not a JSON object.
    pub fn parse_errors(&self) -> usize {
        self.parse_errors
    }

    /// Number of parsed records rejected by the date filter.
    pub fn filtered_out(&self) -> usize {
        self.filtered_out
    }

    pub fn records_loaded(&self) -> usize {
        self.records_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_stats_initialization() {
        let stats = LoadStats::new();
        assert_eq!(stats.files_read(), 0);
        assert_eq!(stats.lines_read(), 0);
        assert_eq!(stats.parse_errors(), 0);
        assert_eq!(stats.records_loaded(), 0);
    }

    #[test]
    fn test_load_stats_increment() {
        let mut stats = LoadStats::new();
        stats.record_file();
        stats.record_line();
        stats.record_line();
        stats.record_line();
        stats.record_blank();
        stats.record_parse_error();
        stats.record_loaded();

        assert_eq!(stats.files_read(), 1);
        assert_eq!(stats.lines_read(), 3);
        assert_eq!(stats.blank_lines(), 1);
        assert_eq!(stats.parse_errors(), 1);
        assert_eq!(stats.filtered_out(), 0);
        assert_eq!(stats.records_loaded(), 1);
    }
}
