//! Configuration constants.
//!
//! Field names consumed from log records, date formats, report names and the
//! user-facing messages printed by the CLI.

// Log record fields
pub const FIELD_URL: &str = "url";
pub const FIELD_RESPONSE_TIME: &str = "response_time";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_USER_AGENT: &str = "http_user_agent";
pub const FIELD_TIMESTAMP: &str = "@timestamp";

/// Shape a `--date` value must have before it is handed to chrono.
pub const DATE_FILTER_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
/// chrono format for `--date` values.
pub const DATE_FILTER_FORMAT: &str = "%Y-%m-%d";

/// Fallback layouts for `@timestamp` values that are not RFC 3339.
///
/// Tried in order after RFC 3339 parsing fails. Offset-aware layouts come
/// first so the calendar date is taken in the record's own offset.
pub const TIMESTAMP_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];
pub const TIMESTAMP_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// Built-in report names
pub const REPORT_AVERAGE: &str = "average";
pub const REPORT_USER_AGENT: &str = "user_agent";
pub const REPORT_STATUS: &str = "status";

/// Decimal places kept for `avg_response_time`.
pub const RESPONSE_TIME_PRECISION: i32 = 3;
/// Decimal places kept for percentage columns.
pub const PERCENTAGE_PRECISION: i32 = 2;

// User-facing messages
pub const MSG_NO_RECORDS: &str = "Не найдено записей для обработки";
pub const MSG_NO_REPORT_ROWS: &str = "Нет данных для отчета";
pub const MSG_NO_TABLE_DATA: &str = "Нет данных для отображения";

/// Usage examples appended to `--help`.
pub const CLI_EXAMPLES: &str = "Примеры использования:
  log_report --file example1.log --report average
  log_report --file example1.log example2.log --report average
  log_report --file example1.log --report user_agent --date 2025-06-22
  log_report --file example1.log --report status --format json";
