//! Publication date parsing.
//!
//! Dates are stored as naive local wall-clock strings in the fixed
//! `YYYY-MM-DDTHH:MM` layout. An empty string means "not scheduled".

use chrono::NaiveDateTime;
use thiserror::Error;

/// Storage layout of the publication date.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Raised when a non-empty date string does not match [`DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}': expected YYYY-MM-DDTHH:MM ({reason})")]
pub struct DateParseError {
    pub value: String,
    pub reason: String,
}

/// Parse a stored date.
///
/// Returns `Ok(None)` for an empty or whitespace-only value.
pub fn parse_schedule(value: &str) -> Result<Option<NaiveDateTime>, DateParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|e| DateParseError {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
