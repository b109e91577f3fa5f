//! Error type definitions.
//!
//! This module defines the fatal error taxonomy of a report run and the
//! logger initialization error.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal errors raised while loading logs or generating a report.
///
/// Per-line JSON parse failures are not represented here: they are reported
/// on the diagnostics channel and the line is dropped.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The `--date` value is not a valid `YYYY-MM-DD` date.
    #[error("Неверный формат даты: {0}. Используйте YYYY-MM-DD")]
    InvalidDate(String),

    /// No report is registered under the requested name.
    #[error("Неподдерживаемый тип отчета: {0}")]
    UnknownReport(String),

    /// An input path does not exist.
    #[error("Файл не найден: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An existing input file could not be opened or read to the end.
    #[error("Ошибка чтения файла {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of [`AnalyzerError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Bad user input (date filter, report name)
    Validation,
    /// Missing input file
    NotFound,
    /// I/O failure on an existing file
    Read,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation error",
            ErrorKind::NotFound => "File not found",
            ErrorKind::Read => "Read error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnalyzerError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzerError::InvalidDate(_) | AnalyzerError::UnknownReport(_) => {
                ErrorKind::Validation
            }
            AnalyzerError::FileNotFound(_) => ErrorKind::NotFound,
            AnalyzerError::Read { .. } => ErrorKind::Read,
        }
    }
}
