//! Report generation.
//!
//! This module provides:
//! - The report registry (name → aggregation, headers, description)
//! - The built-in `average`, `user_agent` and `status` aggregations
//! - Report rows and cell values
//! - User-Agent classification

mod aggregations;
mod registry;
mod row;
mod user_agent;

// Re-export public API
pub use aggregations::{average_report, status_report, user_agent_report};
pub use registry::{Aggregation, ReportDefinition, ReportRegistry};
pub use row::{round_to, CellValue, ReportRow};
pub use user_agent::{classify_user_agent, BrowserFamily};
