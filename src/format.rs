//! Display formatting for raw report fields.
//!
//! All functions here are pure and total: any input produces a displayable
//! string, never an error.

use chrono::{DateTime, NaiveDateTime};

use crate::api::{OverallStatus, RuleStatus};

const TIMESTAMP_DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

/// Display class for a status badge. Unrecognized statuses map to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Pass,
    Fail,
    Warning,
    Default,
}

/// Format a byte count using the largest unit that keeps the numeric part in
/// [1, 1024), rounded to 2 decimal places with trailing zeros trimmed.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ilog2() / 10).min(3) as usize;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", trim_decimals(rounded), UNITS[exponent])
}

/// Render to 2 decimal places, then drop trailing zeros ("1.50" -> "1.5",
/// "512.00" -> "512").
fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render the service's ISO-8601 timestamp as a short human-readable string,
/// e.g. "Aug 23, 2026, 02:32 PM". Unparseable input is returned unchanged.
#[must_use]
pub fn format_timestamp(timestamp: &str) -> String {
    if let Ok(dt) = timestamp.parse::<NaiveDateTime>() {
        return dt.format(TIMESTAMP_DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format(TIMESTAMP_DISPLAY).to_string();
    }
    timestamp.to_string()
}

/// Durations under one second render as integer milliseconds, otherwise as
/// seconds with 2 decimal places.
#[must_use]
pub fn format_processing_time(milliseconds: u64) -> String {
    if milliseconds < 1000 {
        return format!("{milliseconds}ms");
    }
    #[allow(clippy::cast_precision_loss)]
    let seconds = milliseconds as f64 / 1000.0;
    format!("{seconds:.2}s")
}

/// Display class for an aggregate status badge.
///
/// `ERROR` renders as a warning: the document was processed but at least one
/// rule could not be evaluated.
#[must_use]
pub const fn overall_status_class(status: OverallStatus) -> StatusClass {
    match status {
        OverallStatus::AllPass => StatusClass::Pass,
        OverallStatus::AllFail => StatusClass::Fail,
        OverallStatus::PartialPass | OverallStatus::Error => StatusClass::Warning,
        OverallStatus::NoResults | OverallStatus::Unknown => StatusClass::Default,
    }
}

/// Display class for a single rule's status badge.
#[must_use]
pub const fn rule_status_class(status: RuleStatus) -> StatusClass {
    match status {
        RuleStatus::Pass => StatusClass::Pass,
        RuleStatus::Fail => StatusClass::Fail,
        RuleStatus::Error => StatusClass::Warning,
        RuleStatus::Unknown => StatusClass::Default,
    }
}

/// Label for a confidence score. Thresholds are inclusive and evaluated in
/// descending order.
#[must_use]
pub const fn confidence_level(confidence: u8) -> &'static str {
    if confidence >= 90 {
        "Very High"
    } else if confidence >= 75 {
        "High"
    } else if confidence >= 60 {
        "Medium"
    } else if confidence >= 40 {
        "Low"
    } else {
        "Very Low"
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
