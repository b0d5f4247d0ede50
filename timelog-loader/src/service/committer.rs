//! Worklog committer
//!
//! Resolves the issue a [`LogRequest`] targets and submits the worklog.

use std::sync::Arc;
use timelog_core::{IssueKey, IssueRef, LogRequest, TrackerError};
use tracing::debug;

use crate::service::resolver::{SubtaskCache, SubtaskResolver};
use crate::tracker::Tracker;

/// Prefix of every worklog comment written by the loader
pub const COMMENT_PREFIX: &str = "Automated worklog loader";

/// Submits one worklog per request
pub struct WorklogCommitter {
    tracker: Arc<dyn Tracker>,
    resolver: SubtaskResolver,
}

impl WorklogCommitter {
    pub fn new(tracker: Arc<dyn Tracker>, resolver: SubtaskResolver) -> Self {
        Self { tracker, resolver }
    }

    /// Commits a worklog for `request`
    ///
    /// Composite keys go through the sub-task resolver with the run's
    /// `cache`; direct keys are fetched from the tracker. Errors are passed
    /// through unchanged; nothing is retried here.
    pub async fn commit(
        &self,
        request: &LogRequest,
        cache: &mut SubtaskCache,
    ) -> Result<IssueRef, TrackerError> {
        let issue = match &request.issue_key {
            IssueKey::Composite(key) => self.resolver.resolve(key, &request.summary, cache).await?,
            IssueKey::Direct(key) => self.tracker.get_issue(key).await?.reference(),
        };

        let comment = compose_comment(&request.author, &request.comment);
        debug!("Logging {} on {} ({})", request.duration, issue.key, comment);

        self.tracker
            .add_worklog(&issue, &request.duration, &request.started_at, &comment)
            .await?;

        Ok(issue)
    }
}

/// `Automated worklog loader (author)`, plus `: comment` when there is one
pub fn compose_comment(author: &str, comment: &str) -> String {
    let mut text = format!("{} ({})", COMMENT_PREFIX, author);
    if !comment.is_empty() {
        text.push_str(": ");
        text.push_str(comment);
    }
    text
}
