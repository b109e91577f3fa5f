//! Main application modules.
//!
//! This module provides the statistics logging used once a load completes.

pub mod statistics;

// Re-export public API
pub use statistics::log_load_summary;
