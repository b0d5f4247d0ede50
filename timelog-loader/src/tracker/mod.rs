//! Tracker capability
//!
//! The loader services talk to the issue tracker only through the
//! [`Tracker`] trait. [`JiraTracker`] is the production implementation;
//! tests use the in-memory `RecordingTracker`.
//!
//! Calls are awaited one at a time by the services. Running two loaders
//! against the same parent issue at once is not supported and can create
//! duplicate sub-tasks; that is left to the caller.

mod jira;
#[cfg(test)]
pub mod recording;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use timelog_core::{Issue, IssueRef, TrackerError};

pub use jira::JiraTracker;

/// Operations the reconciliation engine needs from an issue tracker
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Fetches an issue by key
    async fn get_issue(&self, key: &str) -> Result<Issue, TrackerError>;

    /// Lists the sub-tasks of `parent_key` in the tracker's order
    async fn search_subtasks_of_parent(
        &self,
        parent_key: &str,
    ) -> Result<Vec<Issue>, TrackerError>;

    /// Creates a sub-task of `parent_key` in project `project_key`
    async fn create_subtask(
        &self,
        parent_key: &str,
        project_key: &str,
        summary: &str,
        description: &str,
    ) -> Result<Issue, TrackerError>;

    /// Adds a worklog to `issue`
    ///
    /// `duration` uses the tracker's own syntax (`30m`, `1h 30m`) and is
    /// validated by the tracker, not here.
    async fn add_worklog(
        &self,
        issue: &IssueRef,
        duration: &str,
        started_at: &DateTime<FixedOffset>,
        comment: &str,
    ) -> Result<(), TrackerError>;
}
