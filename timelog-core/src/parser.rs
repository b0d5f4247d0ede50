//! Row parser
//!
//! Turns the raw fields of one input record into a [`LogRequest`].
//! Field order is fixed: issue key, summary, duration, start time, author,
//! comment. Surrounding whitespace of each field is ignored.

use chrono::{DateTime, FixedOffset};

use crate::domain::worklog::{IssueKey, LogRequest};
use crate::error::ParseError;

/// Number of fields every input row must have
pub const FIELD_COUNT: usize = 6;

/// Accepted start time layout; the milliseconds field must be `000`
pub const STARTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000%z";

/// Length of `YYYY-MM-DDTHH:MM:SS.000±HHMM`
const STARTED_AT_LEN: usize = 28;

/// Parse one row into a [`LogRequest`]
///
/// # Errors
/// - [`ParseError::MalformedRow`] if the row does not have exactly
///   [`FIELD_COUNT`] fields
/// - [`ParseError::BadTimestamp`] if the start time deviates from
///   [`STARTED_AT_FORMAT`]
/// - [`ParseError::MissingIssueKey`] / [`ParseError::BadIssueKey`] for
///   unusable issue keys
pub fn parse_row<S: AsRef<str>>(fields: &[S]) -> Result<LogRequest, ParseError> {
    let [issue_key, summary, duration, started_at, author, comment] = fields else {
        return Err(ParseError::MalformedRow {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    Ok(LogRequest {
        issue_key: IssueKey::parse(issue_key.as_ref())?,
        summary: summary.as_ref().trim().to_string(),
        duration: duration.as_ref().trim().to_string(),
        started_at: parse_started_at(started_at.as_ref())?,
        author: author.as_ref().trim().to_string(),
        comment: comment.as_ref().trim().to_string(),
    })
}

/// Parse a start time such as `2024-01-15T09:00:00.000+0000`
///
/// The shape is checked before handing off to chrono, which on its own
/// would also accept offsets written as `+00:00`.
pub fn parse_started_at(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let value = value.trim();
    let bad = || ParseError::BadTimestamp(value.to_string());

    let bytes = value.as_bytes();
    if bytes.len() != STARTED_AT_LEN
        || !matches!(bytes[23], b'+' | b'-')
        || !bytes[24..].iter().all(u8::is_ascii_digit)
    {
        return Err(bad());
    }

    DateTime::parse_from_str(value, STARTED_AT_FORMAT).map_err(|_| bad())
}
