//! Error types shared by the parser, the loader services and the client

use thiserror::Error;

/// Row-local parse failures
///
/// Always recoverable: the batch records the failure and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of fields in the row
    #[error("Wrong format: expected {expected} fields, found {found}")]
    MalformedRow { expected: usize, found: usize },

    /// `startedAt` does not match `YYYY-MM-DDTHH:MM:SS.000±HHMM`
    #[error("Wrong format: start time '{0}' does not match YYYY-MM-DDTHH:MM:SS.000+HHMM")]
    BadTimestamp(String),

    /// Issue key field is empty
    #[error("Wrong format: issue key is empty")]
    MissingIssueKey,

    /// Composite key with an empty parent or sub-task token
    #[error("Wrong format: issue key '{0}' must look like PARENT/TOKEN")]
    BadIssueKey(String),
}

/// Failures reported by the tracker capability
///
/// Every variant carries the tracker's human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Issue does not exist or is not visible to the user
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// Credentials missing, wrong, or lacking permission
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// The tracker refused the request (validation, bad duration syntax, ...)
    #[error("Rejected by tracker: {0}")]
    Rejected(String),

    /// The tracker could not be reached or answered with a server error
    #[error("Tracker unavailable: {0}")]
    Unavailable(String),

    /// The tracker answered with something the loader cannot use
    #[error("Unexpected tracker response: {0}")]
    InvalidResponse(String),
}
