//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{CLI_EXAMPLES, REPORT_AVERAGE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How report rows are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered text grid
    Table,
    /// Pretty-printed JSON array, one object per row
    Json,
}

/// Command-line options.
///
/// The accepted `--report` values are attached at runtime from the report
/// registry (see `main.rs`), so reports registered in code show up in
/// `--help` without touching this struct.
///
/// # Examples
///
/// ```bash
/// log_report --file access.log --report average
/// log_report --file a.log b.log --report status --date 2025-06-22
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "log_report",
    about = "Анализ лог-файлов и генерация отчетов",
    after_long_help = CLI_EXAMPLES
)]
pub struct Opt {
    /// Путь к лог-файлу(ам)
    #[arg(long, required = true, num_args = 1..)]
    pub file: Vec<PathBuf>,

    /// Тип отчета для генерации
    #[arg(long)]
    pub report: String,

    /// Фильтр по дате в формате YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Output format: table|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the struct `run_report` consumes. It can be constructed
/// programmatically without going through clap.
///
/// # Examples
///
/// ```no_run
/// use log_report::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("access.log")],
///     report: "status".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log files to read, in order
    pub files: Vec<PathBuf>,

    /// Name of the report to generate
    pub report: String,

    /// Optional `YYYY-MM-DD` date filter
    pub date: Option<String>,

    /// Output format
    pub format: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            report: REPORT_AVERAGE.to_string(),
            date: None,
            format: OutputFormat::Table,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            files: opt.file,
            report: opt.report,
            date: opt.date,
            format: opt.format,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.files.is_empty());
        assert_eq!(config.report, "average");
        assert!(config.date.is_none());
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_from_opt() {
        let opt = Opt::try_parse_from([
            "log_report",
            "--file",
            "a.log",
            "b.log",
            "--report",
            "status",
            "--date",
            "2025-06-22",
        ])
        .expect("Should parse");

        let config = Config::from(opt);
        assert_eq!(
            config.files,
            vec![PathBuf::from("a.log"), PathBuf::from("b.log")]
        );
        assert_eq!(config.report, "status");
        assert_eq!(config.date.as_deref(), Some("2025-06-22"));
    }
}
