//! Jira implementation of the tracker capability

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use timelog_client::JiraClient;
use timelog_core::dto::issue::CreateIssue;
use timelog_core::dto::worklog::CreateWorklog;
use timelog_core::{Issue, IssueRef, TrackerError};
use tracing::debug;

use super::Tracker;

/// [`Tracker`] backed by the Jira REST client
pub struct JiraTracker {
    client: JiraClient,
    subtask_issue_type: String,
}

impl JiraTracker {
    /// Creates a new Jira tracker
    ///
    /// # Arguments
    /// * `client` - An authenticated Jira client
    /// * `subtask_issue_type` - Issue type name used for created sub-tasks
    pub fn new(client: JiraClient, subtask_issue_type: impl Into<String>) -> Self {
        Self {
            client,
            subtask_issue_type: subtask_issue_type.into(),
        }
    }
}

#[async_trait]
impl Tracker for JiraTracker {
    async fn get_issue(&self, key: &str) -> Result<Issue, TrackerError> {
        Ok(self.client.get_issue(key).await?)
    }

    async fn search_subtasks_of_parent(
        &self,
        parent_key: &str,
    ) -> Result<Vec<Issue>, TrackerError> {
        let subtasks = self.client.search_subtasks(parent_key).await?;
        debug!("{} has {} sub-task(s)", parent_key, subtasks.len());
        Ok(subtasks)
    }

    async fn create_subtask(
        &self,
        parent_key: &str,
        project_key: &str,
        summary: &str,
        description: &str,
    ) -> Result<Issue, TrackerError> {
        let req = CreateIssue::subtask(
            parent_key,
            project_key,
            &self.subtask_issue_type,
            summary,
            description,
        );
        let created = self.client.create_issue(&req).await?;
        debug!("Created sub-task {} under {}", created.key, parent_key);

        // The sub-task exists once the POST succeeded; build it from the
        // response rather than fetching it again.
        Ok(created.into_issue(&req))
    }

    async fn add_worklog(
        &self,
        issue: &IssueRef,
        duration: &str,
        started_at: &DateTime<FixedOffset>,
        comment: &str,
    ) -> Result<(), TrackerError> {
        let req = CreateWorklog::new(duration, started_at, comment);
        let worklog = self.client.add_worklog(&issue.key, &req).await?;
        debug!("Worklog {} added to {}", worklog.id, issue.key);
        Ok(())
    }
}
