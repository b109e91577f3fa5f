//! Log records and the in-memory record store.

use serde_json::{Map, Value};

use crate::config::{FIELD_RESPONSE_TIME, FIELD_STATUS, FIELD_TIMESTAMP, FIELD_URL, FIELD_USER_AGENT};

/// One parsed log line.
///
/// Records keep every field of the source object; only a handful are read by
/// the built-in reports. Accessors return `None` whenever a field is missing
/// or has a shape the reports cannot use.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw access to any field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// `url` in text form, for any truthy value: `42` groups as `"42"`.
    ///
    /// `null`, `false`, `0`, `""`, `[]` and `{}` count as absent.
    pub fn url(&self) -> Option<String> {
        self.get(FIELD_URL)
            .filter(|value| is_truthy(value))
            .map(text_form)
    }

    /// `response_time` as a finite number. Booleans and numeric strings are rejected.
    pub fn response_time(&self) -> Option<f64> {
        match self.get(FIELD_RESPONSE_TIME)? {
            Value::Number(n) => n.as_f64().filter(|t| t.is_finite()),
            _ => None,
        }
    }

    /// `status` coerced to text, so `200` and `"200"` compare equal.
    pub fn status(&self) -> Option<String> {
        match self.get(FIELD_STATUS)? {
            Value::Null => None,
            other => Some(text_form(other)),
        }
    }

    /// Non-empty `http_user_agent` string.
    pub fn user_agent(&self) -> Option<&str> {
        self.get(FIELD_USER_AGENT)
            .and_then(Value::as_str)
            .filter(|ua| !ua.is_empty())
    }

    /// `@timestamp` if it is a string.
    pub fn timestamp(&self) -> Option<&str> {
        self.get(FIELD_TIMESTAMP).and_then(Value::as_str)
    }
}

/// Strings as-is, everything else as its JSON text.
fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl From<Map<String, Value>> for LogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Ordered, append-only collection of loaded records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<LogRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl FromIterator<LogRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
