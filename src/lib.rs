//! log_report library: access-log aggregation
//!
//! This library loads newline-delimited JSON access logs, optionally keeps
//! only one calendar day, and aggregates the records into tabular reports:
//! per-endpoint average response time, browser distribution and status-code
//! distribution.
//!
//! # Example
//!
//! ```no_run
//! use log_report::{run_report, Config, ReportOutcome, ReportRegistry};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     files: vec![PathBuf::from("access.log")],
//!     report: "average".to_string(),
//!     ..Default::default()
//! };
//!
//! let registry = ReportRegistry::with_builtins();
//! let mut diagnostics = std::io::stdout();
//! match run_report(&config, &registry, &mut diagnostics)? {
//!     ReportOutcome::Rendered(table) => println!("{}", table),
//!     other => println!("{}", other.message().unwrap_or_default()),
//! }
//! # Ok::<(), log_report::AnalyzerError>(())
//! ```
//!
//! # Extending
//!
//! Reports are looked up by name in a [`ReportRegistry`]. Additional reports
//! can be registered before calling [`run_report`]:
//!
//! ```
//! use log_report::{RecordStore, ReportRegistry, ReportRow};
//!
//! let mut registry = ReportRegistry::with_builtins();
//! registry.register(
//!     "records",
//!     |store: &RecordStore| vec![ReportRow::new().with("records", store.len() as u64)],
//!     &["records"],
//!     "Total number of loaded records",
//! );
//! assert!(registry.contains("records"));
//! ```

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod loader;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{AnalyzerError, ErrorKind, InitializationError, LoadStats};
pub use loader::{load_logs, DateFilter, LoadOutcome, LogRecord, RecordStore};
pub use report::{classify_user_agent, BrowserFamily, CellValue, ReportRegistry, ReportRow};
pub use run::{run_report, ReportOutcome};

// Internal run module (wires loading, aggregation and rendering together)
mod run {
    use std::io::Write;

    use log::info;

    use crate::app::log_load_summary;
    use crate::config::{Config, MSG_NO_RECORDS, MSG_NO_REPORT_ROWS};
    use crate::error_handling::AnalyzerError;
    use crate::export::render;
    use crate::loader::load_logs;
    use crate::report::ReportRegistry;

    /// What a successful run produced.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReportOutcome {
        /// No record survived loading and filtering
        NoRecords,
        /// Records were loaded but the report had no rows
        NoRows,
        /// The rendered report, ready to print
        Rendered(String),
    }

    impl ReportOutcome {
        /// User-facing message for the empty outcomes.
        pub fn message(&self) -> Option<&'static str> {
            match self {
                ReportOutcome::NoRecords => Some(MSG_NO_RECORDS),
                ReportOutcome::NoRows => Some(MSG_NO_REPORT_ROWS),
                ReportOutcome::Rendered(_) => None,
            }
        }
    }

    /// Loads the configured files and renders the configured report.
    ///
    /// The report name is checked against `registry` before any file is
    /// read. Per-line parse diagnostics are written to `diagnostics`.
    ///
    /// # Errors
    ///
    /// - `AnalyzerError::UnknownReport` if `config.report` is not registered
    /// - `AnalyzerError::InvalidDate` if `config.date` is not `YYYY-MM-DD`
    /// - `AnalyzerError::FileNotFound` / `AnalyzerError::Read` on input failures
    pub fn run_report(
        config: &Config,
        registry: &ReportRegistry,
        diagnostics: &mut dyn Write,
    ) -> Result<ReportOutcome, AnalyzerError> {
        let headers = registry.headers_for(&config.report)?;

        let outcome = load_logs(&config.files, config.date.as_deref(), diagnostics)?;
        log_load_summary(&outcome.stats);

        if outcome.store.is_empty() {
            return Ok(ReportOutcome::NoRecords);
        }

        let rows = registry.generate(&config.report, &outcome.store)?;
        if rows.is_empty() {
            info!("Report '{}' has no rows", config.report);
            return Ok(ReportOutcome::NoRows);
        }

        Ok(ReportOutcome::Rendered(render(&rows, headers, config.format)))
    }
}
