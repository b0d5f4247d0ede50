//! Data Transfer Objects for the Jira REST API
//!
//! Request and response bodies exchanged with the tracker. Domain types
//! such as [`crate::Issue`] are deserialized directly where the wire
//! shape already matches; everything here is wire-only.

pub mod error;
pub mod issue;
pub mod search;
pub mod user;
pub mod worklog;
