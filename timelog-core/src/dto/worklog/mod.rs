//! Worklog DTOs

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Layout Jira expects for `started`, e.g. `2024-01-15T09:00:00.000+0000`
pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Request to add a worklog to an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorklog {
    pub time_spent: String,
    pub started: String,
    pub comment: String,
}

impl CreateWorklog {
    pub fn new(duration: &str, started_at: &DateTime<FixedOffset>, comment: &str) -> Self {
        Self {
            time_spent: duration.to_string(),
            started: started_at.format(STARTED_FORMAT).to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Worklog as returned after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    pub id: String,
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub time_spent_seconds: Option<u64>,
}
