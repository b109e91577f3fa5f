// Shared test helpers for writing log fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

/// Writes `lines` joined by newlines to a temporary `.log` file.
/// The file is removed when the returned handle is dropped.
#[allow(dead_code)] // Used by other test files
pub fn write_log<S: AsRef<str>>(lines: &[S]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".log")
        .tempfile()
        .expect("Failed to create temp log file");
    let content: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    file.write_all(content.join("\n").as_bytes())
        .expect("Failed to write temp log file");
    file.flush().expect("Failed to flush temp log file");
    file
}

/// Writes raw bytes to a temporary file, for encoding tests.
#[allow(dead_code)] // Used by other test files
pub fn write_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A path inside a fresh temporary directory that does not exist.
/// Keep the returned `TempDir` alive for as long as the path is used.
#[allow(dead_code)] // Used by other test files
pub fn missing_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nonexistent_file.log");
    (dir, path)
}

/// A typical nginx-style JSON access-log line.
#[allow(dead_code)] // Used by other test files
pub fn access_line(timestamp: &str, url: &str, status: u16, response_time: f64, user_agent: &str) -> String {
    serde_json::json!({
        "@timestamp": timestamp,
        "status": status,
        "url": url,
        "request_method": "GET",
        "response_time": response_time,
        "http_user_agent": user_agent,
    })
    .to_string()
}
