//! Application configuration and constants.
//!
//! This module provides:
//! - Record field names, date formats and user-facing messages
//! - CLI option types and parsing
//! - The CLI-free `Config` consumed by the library

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
