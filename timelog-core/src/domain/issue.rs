//! Issue domain types

use serde::{Deserialize, Serialize};

/// An issue as returned by the tracker
///
/// Only the fields the loader needs are modelled; everything else in the
/// tracker's response is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub project: Option<ProjectRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub key: String,
}

/// Minimal handle worklogs are submitted against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: String,
    pub key: String,
}

impl Issue {
    /// Returns the handle for this issue
    pub fn reference(&self) -> IssueRef {
        IssueRef {
            id: self.id.clone(),
            key: self.key.clone(),
        }
    }

    /// Issue title
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Key of the project the issue belongs to, if the tracker returned it
    pub fn project_key(&self) -> Option<&str> {
        self.fields.project.as_ref().map(|p| p.key.as_str())
    }
}

impl std::fmt::Display for IssueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_deserializes_from_tracker_payload() {
        let json = serde_json::json!({
            "id": "10001",
            "key": "TEST-1",
            "self": "http://localhost:8080/rest/api/2/issue/10001",
            "fields": {
                "summary": "Fix bug",
                "project": { "id": "10000", "key": "TEST", "name": "Test" },
                "status": { "name": "Open" }
            }
        });

        let issue: Issue = serde_json::from_value(json).unwrap();
        assert_eq!(issue.key, "TEST-1");
        assert_eq!(issue.summary(), "Fix bug");
        assert_eq!(issue.project_key(), Some("TEST"));
    }

    #[test]
    fn test_issue_without_fields() {
        let json = serde_json::json!({ "id": "10002", "key": "TEST-2" });

        let issue: Issue = serde_json::from_value(json).unwrap();
        assert_eq!(issue.summary(), "");
        assert_eq!(issue.project_key(), None);
        assert_eq!(
            issue.reference(),
            IssueRef {
                id: "10002".to_string(),
                key: "TEST-2".to_string()
            }
        );
    }
}
