//! Report registry.
//!
//! Maps report names to their aggregation, column headers and description.
//! The registry is built once at startup with the built-in reports and can be
//! extended with [`ReportRegistry::register`] before reports are generated.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::config::{REPORT_AVERAGE, REPORT_STATUS, REPORT_USER_AGENT};
use crate::error_handling::AnalyzerError;
use crate::loader::RecordStore;
use crate::report::aggregations::{average_report, status_report, user_agent_report};
use crate::report::row::ReportRow;

/// Aggregation signature shared by built-in and user-registered reports.
pub type Aggregation = Box<dyn Fn(&RecordStore) -> Vec<ReportRow>>;

/// Everything needed to produce and display one report.
pub struct ReportDefinition {
    aggregate: Aggregation,
    headers: Vec<String>,
    description: String,
}

impl ReportDefinition {
    pub fn new<F>(aggregate: F, headers: &[&str], description: &str) -> Self
    where
        F: Fn(&RecordStore) -> Vec<ReportRow> + 'static,
    {
        Self {
            aggregate: Box::new(aggregate),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            description: description.to_string(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aggregate(&self, store: &RecordStore) -> Vec<ReportRow> {
        (self.aggregate)(store)
    }
}

impl fmt::Debug for ReportDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportDefinition")
            .field("headers", &self.headers)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Name-keyed collection of report definitions.
///
/// Iteration and listing are in name order, so `--help` and
/// [`ReportRegistry::list_reports`] are deterministic.
#[derive(Debug, Default)]
pub struct ReportRegistry {
    definitions: BTreeMap<String, ReportDefinition>,
}

impl ReportRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `average`, `user_agent` and `status`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            REPORT_AVERAGE,
            average_report,
            &["handler", "total", "avg_response_time"],
            "Количество запросов и среднее время ответа по эндпоинтам",
        );
        registry.register(
            REPORT_USER_AGENT,
            user_agent_report,
            &["browser", "requests", "percentage"],
            "Распределение запросов по браузерам (User-Agent)",
        );
        registry.register(
            REPORT_STATUS,
            status_report,
            &["status", "requests", "percentage"],
            "Распределение запросов по HTTP-статусам",
        );
        registry
    }

    /// Adds a report, replacing any definition already under `name`.
    pub fn register<F>(&mut self, name: &str, aggregate: F, headers: &[&str], description: &str)
    where
        F: Fn(&RecordStore) -> Vec<ReportRow> + 'static,
    {
        let definition = ReportDefinition::new(aggregate, headers, description);
        if self.definitions.insert(name.to_string(), definition).is_some() {
            debug!("Replaced report definition '{}'", name);
        } else {
            debug!("Registered report '{}'", name);
        }
    }

    /// Report names mapped to their descriptions.
    pub fn list_reports(&self) -> BTreeMap<&str, &str> {
        self.definitions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.description()))
            .collect()
    }

    /// Registered report names, in name order.
    pub fn names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// # Errors
    ///
    /// Returns `AnalyzerError::UnknownReport` if `name` is not registered.
    pub fn definition(&self, name: &str) -> Result<&ReportDefinition, AnalyzerError> {
        self.definitions
            .get(name)
            .ok_or_else(|| AnalyzerError::UnknownReport(name.to_string()))
    }

    /// Column headers of the named report.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::UnknownReport` if `name` is not registered.
    pub fn headers_for(&self, name: &str) -> Result<&[String], AnalyzerError> {
        Ok(self.definition(name)?.headers())
    }

    /// Runs the named aggregation over `store`.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::UnknownReport` if `name` is not registered.
    pub fn generate(&self, name: &str, store: &RecordStore) -> Result<Vec<ReportRow>, AnalyzerError> {
        let definition = self.definition(name)?;
        let rows = definition.aggregate(store);
        debug!("Report '{}' produced {} rows from {} records", name, rows.len(), store.len());
        Ok(rows)
    }
}
