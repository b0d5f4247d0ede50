//! In-memory tracker for tests
//!
//! Holds issues and sub-task lists in memory, records every call in order
//! and can be told to fail specific operations.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::sync::Mutex;
use timelog_core::domain::issue::{IssueFields, ProjectRef};
use timelog_core::{Issue, IssueRef, TrackerError};

use super::Tracker;

/// A recorded tracker call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetIssue(String),
    SearchSubtasks(String),
    CreateSubtask {
        parent_key: String,
        project_key: String,
        summary: String,
        description: String,
    },
    AddWorklog {
        issue_key: String,
        duration: String,
        started_at: DateTime<FixedOffset>,
        comment: String,
    },
}

/// Operation a failure can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    GetIssue,
    SearchSubtasks,
    CreateSubtask,
    AddWorklog,
}

struct Failure {
    op: Op,
    key: String,
    error: TrackerError,
    once: bool,
}

#[derive(Default)]
struct State {
    issues: HashMap<String, Issue>,
    subtasks: HashMap<String, Vec<String>>,
    calls: Vec<Call>,
    failures: Vec<Failure>,
    next_id: u64,
}

impl State {
    fn take_failure(&mut self, op: Op, key: &str) -> Option<TrackerError> {
        let idx = self
            .failures
            .iter()
            .position(|f| f.op == op && f.key == key)?;
        if self.failures[idx].once {
            Some(self.failures.remove(idx).error)
        } else {
            Some(self.failures[idx].error.clone())
        }
    }

    fn insert_issue(&mut self, key: &str, summary: &str) -> Issue {
        self.next_id += 1;
        let project = key.split('-').next().unwrap_or(key).to_string();
        let issue = Issue {
            id: (10000 + self.next_id).to_string(),
            key: key.to_string(),
            fields: IssueFields {
                summary: summary.to_string(),
                project: Some(ProjectRef { key: project }),
            },
        };
        self.issues.insert(key.to_string(), issue.clone());
        issue
    }
}

/// In-memory [`Tracker`] that records its calls
#[derive(Default)]
pub struct RecordingTracker {
    state: Mutex<State>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue; its project key is the part of `key` before the first `-`
    pub fn with_issue(self, key: &str, summary: &str) -> Self {
        self.state.lock().unwrap().insert_issue(key, summary);
        self
    }

    /// Adds a sub-task of `parent`, listed after any existing ones
    pub fn with_subtask(self, parent: &str, key: &str, summary: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.insert_issue(key, summary);
            state
                .subtasks
                .entry(parent.to_string())
                .or_default()
                .push(key.to_string());
        }
        self
    }

    /// Makes every `op` on `key` fail with `error`
    pub fn failing(self, op: Op, key: &str, error: TrackerError) -> Self {
        self.push_failure(op, key, error, false);
        self
    }

    /// Makes the next `op` on `key` fail with `error`
    pub fn failing_once(self, op: Op, key: &str, error: TrackerError) -> Self {
        self.push_failure(op, key, error, true);
        self
    }

    fn push_failure(&self, op: Op, key: &str, error: TrackerError, once: bool) {
        self.state.lock().unwrap().failures.push(Failure {
            op,
            key: key.to_string(),
            error,
            once,
        });
    }

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    (op, call),
                    (Op::GetIssue, Call::GetIssue(_))
                        | (Op::SearchSubtasks, Call::SearchSubtasks(_))
                        | (Op::CreateSubtask, Call::CreateSubtask { .. })
                        | (Op::AddWorklog, Call::AddWorklog { .. })
                )
            })
            .count()
    }

    /// Worklog calls only
    pub fn worklogs(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::AddWorklog { .. }))
            .collect()
    }
}

fn not_found(key: &str) -> TrackerError {
    TrackerError::NotFound(format!("Issue {} does not exist", key))
}

#[async_trait]
impl Tracker for RecordingTracker {
    async fn get_issue(&self, key: &str) -> Result<Issue, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetIssue(key.to_string()));
        if let Some(error) = state.take_failure(Op::GetIssue, key) {
            return Err(error);
        }
        state.issues.get(key).cloned().ok_or_else(|| not_found(key))
    }

    async fn search_subtasks_of_parent(
        &self,
        parent_key: &str,
    ) -> Result<Vec<Issue>, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SearchSubtasks(parent_key.to_string()));
        if let Some(error) = state.take_failure(Op::SearchSubtasks, parent_key) {
            return Err(error);
        }
        let keys = state.subtasks.get(parent_key).cloned().unwrap_or_default();
        Ok(keys
            .iter()
            .filter_map(|key| state.issues.get(key).cloned())
            .collect())
    }

    async fn create_subtask(
        &self,
        parent_key: &str,
        project_key: &str,
        summary: &str,
        description: &str,
    ) -> Result<Issue, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateSubtask {
            parent_key: parent_key.to_string(),
            project_key: project_key.to_string(),
            summary: summary.to_string(),
            description: description.to_string(),
        });
        if let Some(error) = state.take_failure(Op::CreateSubtask, parent_key) {
            return Err(error);
        }

        let key = format!("{}-{}", project_key, 100 + state.next_id);
        let issue = state.insert_issue(&key, summary);
        state
            .subtasks
            .entry(parent_key.to_string())
            .or_default()
            .push(key);
        Ok(issue)
    }

    async fn add_worklog(
        &self,
        issue: &IssueRef,
        duration: &str,
        started_at: &DateTime<FixedOffset>,
        comment: &str,
    ) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::AddWorklog {
            issue_key: issue.key.clone(),
            duration: duration.to_string(),
            started_at: *started_at,
            comment: comment.to_string(),
        });
        if let Some(error) = state.take_failure(Op::AddWorklog, &issue.key) {
            return Err(error);
        }
        if !state.issues.contains_key(&issue.key) {
            return Err(not_found(&issue.key));
        }
        Ok(())
    }
}
