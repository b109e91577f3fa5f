//! Calendar-date filtering on `@timestamp`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::config::{
    DATE_FILTER_FORMAT, DATE_FILTER_PATTERN, TIMESTAMP_NAIVE_FORMATS, TIMESTAMP_OFFSET_FORMATS,
};
use crate::error_handling::AnalyzerError;
use crate::loader::LogRecord;

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static DATE_FILTER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DATE_FILTER_PATTERN, "DATE_FILTER_RE"));

/// A single calendar day, without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    date: NaiveDate,
}

impl DateFilter {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Both the shape and the calendar are checked: `2025-6-2` and
    /// `2025-02-30` are rejected alike.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::InvalidDate` carrying the input verbatim.
    pub fn parse(input: &str) -> Result<Self, AnalyzerError> {
        let invalid = || AnalyzerError::InvalidDate(input.to_string());

        if !DATE_FILTER_RE.is_match(input) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(input, DATE_FILTER_FORMAT).map_err(|_| invalid())?;
        Ok(Self { date })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether a record was logged on this day.
    ///
    /// Records with a missing, non-string or unparsable `@timestamp` never match.
    pub fn matches(&self, record: &LogRecord) -> bool {
        record
            .timestamp()
            .and_then(timestamp_date)
            .is_some_and(|date| date == self.date)
    }
}

impl From<NaiveDate> for DateFilter {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

/// Extracts the calendar date of an ISO-8601 timestamp.
///
/// A trailing `Z` means `+00:00`. Offset-aware timestamps yield the date in
/// their own offset, not converted to UTC: `2025-06-22T23:30:00-05:00` is
/// the 22nd. Surrounding whitespace makes the timestamp unusable.
pub fn timestamp_date(raw: &str) -> Option<NaiveDate> {
    if raw.trim() != raw {
        return None;
    }

    let normalized;
    let value = match raw.strip_suffix('Z') {
        Some(stripped) => {
            normalized = format!("{stripped}+00:00");
            normalized.as_str()
        }
        None => raw,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for format in TIMESTAMP_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.date_naive());
        }
    }

    for format in TIMESTAMP_NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, DATE_FILTER_FORMAT).ok()
}
