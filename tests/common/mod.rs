//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use cycle_mcp::{Config, CycleServerHandler, LogDraft};
use tempfile::TempDir;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (CycleServerHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = CycleServerHandler::new(temp_dir.path(), Config::default()).unwrap();
    (handler, temp_dir)
}

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a log draft with a symptom and optional mood
pub fn draft(symptom: &str, mood: Option<&str>) -> LogDraft {
    LogDraft {
        symptom: symptom.to_string(),
        mood: mood.map(str::to_string),
    }
}

/// Extract entry ID from add_log() response message
/// Response format: "Log entry created with ID: <id> (tracker: ..., week: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}
