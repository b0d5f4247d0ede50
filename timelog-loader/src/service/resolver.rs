//! Sub-task resolver
//!
//! Maps a composite key (`PARENT/TOKEN`) onto a concrete sub-task of
//! `PARENT`: the first sub-task whose title starts with `TOKEN`, or a newly
//! created one titled `TOKEN: <summary>`.
//!
//! Matching is a plain prefix test over the sub-tasks in the order the
//! tracker lists them, so `A` also matches a sub-task titled `AB: ...`.
//! When several siblings share the prefix the first one listed wins.
//!
//! The tracker's search may not see a sub-task created moments ago, so two
//! separate runs can each create one for the same key. Within one run the
//! [`SubtaskCache`] prevents that.

use std::collections::HashMap;
use std::sync::Arc;
use timelog_core::{CompositeKey, IssueRef, TrackerError};
use tracing::{debug, info};

use crate::tracker::Tracker;

/// Composite key to sub-task mapping for one batch run
///
/// Only successful resolutions are stored; a failed resolution leaves the
/// cache untouched so a later row retries it.
#[derive(Debug, Default)]
pub struct SubtaskCache {
    entries: HashMap<CompositeKey, IssueRef>,
}

impl SubtaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CompositeKey) -> Option<&IssueRef> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: CompositeKey, issue: IssueRef) {
        self.entries.insert(key, issue);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds or creates the sub-task behind a composite key
pub struct SubtaskResolver {
    tracker: Arc<dyn Tracker>,
    /// Description given to sub-tasks this resolver creates
    description: String,
}

impl SubtaskResolver {
    pub fn new(tracker: Arc<dyn Tracker>, description: impl Into<String>) -> Self {
        Self {
            tracker,
            description: description.into(),
        }
    }

    /// Resolves `key` to a sub-task, creating it if needed
    ///
    /// # Arguments
    /// * `key` - The composite key
    /// * `summary` - Row summary, used for the title of a created sub-task
    /// * `cache` - The run's cache; consulted first, updated on success
    pub async fn resolve(
        &self,
        key: &CompositeKey,
        summary: &str,
        cache: &mut SubtaskCache,
    ) -> Result<IssueRef, TrackerError> {
        if let Some(issue) = cache.get(key) {
            debug!("Using cached sub-task {} for {}", issue.key, key);
            return Ok(issue.clone());
        }

        let subtasks = self.tracker.search_subtasks_of_parent(&key.parent).await?;
        let existing = subtasks
            .iter()
            .find(|subtask| subtask.summary().starts_with(key.child.as_str()));

        let issue = match existing {
            Some(subtask) => {
                debug!("Found sub-task {} for {}", subtask.key, key);
                self.tracker.get_issue(&subtask.key).await?.reference()
            }
            None => self.create(key, summary).await?,
        };

        cache.insert(key.clone(), issue.clone());
        Ok(issue)
    }

    /// Creates the sub-task in the parent's project
    async fn create(&self, key: &CompositeKey, summary: &str) -> Result<IssueRef, TrackerError> {
        let parent = self.tracker.get_issue(&key.parent).await?;
        let project_key = parent.project_key().ok_or_else(|| {
            TrackerError::InvalidResponse(format!("issue {} has no project", parent.key))
        })?;

        let title = subtask_title(&key.child, summary);
        let subtask = self
            .tracker
            .create_subtask(&parent.key, project_key, &title, &self.description)
            .await?;

        info!("Created sub-task {} '{}' under {}", subtask.key, title, parent.key);
        Ok(subtask.reference())
    }
}

/// Title of a created sub-task: `TOKEN: summary`
fn subtask_title(child: &str, summary: &str) -> String {
    format!("{}: {}", child, summary)
}
