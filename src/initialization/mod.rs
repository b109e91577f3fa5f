//! Application initialization.
//!
//! Process-wide setup performed once by the binary before any report runs.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
