//! Timelog Core
//!
//! Core types and abstractions for the Timelog worklog loader.
//!
//! This crate contains:
//! - Domain types: issues, worklog requests and batch outcomes
//! - DTOs: Jira REST payloads shared by the client and the loader
//! - Parser: turns one delimited-text record into a [`LogRequest`]
//! - Errors: row parse errors and tracker errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod parser;

pub use domain::issue::{Issue, IssueRef};
pub use domain::outcome::{RowFailure, RowOutcome, RowStatus, RunOutcome};
pub use domain::worklog::{CompositeKey, IssueKey, LogRequest};
pub use error::{ParseError, TrackerError};
pub use parser::parse_row;
