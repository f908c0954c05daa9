//! Validation helper functions for the cycle MCP server
//!
//! This module parses and checks tool parameters: dates, tracker names and
//! cycle/period lengths. Failures become `INVALID_PARAMS` errors whose message
//! lists the accepted values.

use crate::tracker::{TrackerKind, local_date_today};
use chrono::{Datelike, NaiveDate};
use mcp_attr::Result as McpResult;

/// Longest cycle or period length accepted, in days
pub const MAX_LENGTH_DAYS: u32 = 365;

/// Calendar years accepted for date parameters
pub const DATE_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
/// * `field` - Parameter name, used in the error message
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str, field: &str) -> McpResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid {} '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            field, date_str
        ))
    })?;

    if !DATE_YEARS.contains(&date.year()) {
        return Err(invalid_params(format!(
            "Invalid {} '{}'. Year must be between {} and {}",
            field,
            date_str,
            DATE_YEARS.start(),
            DATE_YEARS.end()
        )));
    }
    Ok(date)
}

/// Resolve the optional `today` parameter, defaulting to the local date
pub fn parse_today(today: Option<&str>) -> McpResult<NaiveDate> {
    match today {
        Some(s) if !s.trim().is_empty() => parse_date(s, "today"),
        _ => Ok(local_date_today()),
    }
}

/// Parse and validate a tracker name
pub fn parse_tracker(tracker: &str) -> McpResult<TrackerKind> {
    tracker.parse::<TrackerKind>().map_err(invalid_params)
}

/// Validate an optional length in days, applying `default` when absent
///
/// # Arguments
/// * `value` - Length supplied by the caller
/// * `default` - Length used when `value` is `None`
/// * `field` - Parameter name, used in the error message
pub fn validate_length(value: Option<u32>, default: u32, field: &str) -> McpResult<u32> {
    let length = value.unwrap_or(default);
    if length == 0 || length > MAX_LENGTH_DAYS {
        return Err(invalid_params(format!(
            "Invalid {} {}. Must be between 1 and {} days",
            field, length, MAX_LENGTH_DAYS
        )));
    }
    Ok(length)
}
