//! Error handling and load statistics.
//!
//! This module provides:
//! - The fatal error taxonomy (`AnalyzerError`, `ErrorKind`)
//! - Logger initialization errors
//! - Per-load counters (`LoadStats`)
//!
//! Per-line JSON parse failures are recoverable and never become an
//! `AnalyzerError`; they are only counted and reported as diagnostics.

mod stats;
mod types;

// Re-export public API
pub use stats::LoadStats;
pub use types::{AnalyzerError, ErrorKind, InitializationError};
