//! Issue DTOs

use serde::{Deserialize, Serialize};

use crate::domain::issue::{Issue, IssueFields, ProjectRef};

/// Request to create an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssue {
    pub fields: CreateIssueFields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueFields {
    pub project: KeyRef,
    pub summary: String,
    pub description: String,
    #[serde(rename = "issuetype")]
    pub issue_type: NameRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
}

/// `{ "key": ... }` reference to a project or issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRef {
    pub key: String,
}

/// `{ "name": ... }` reference to an issue type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}

/// Response to a successful issue creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

impl CreateIssue {
    /// Builds the request for a sub-task under `parent_key`
    pub fn subtask(
        parent_key: &str,
        project_key: &str,
        issue_type: &str,
        summary: &str,
        description: &str,
    ) -> Self {
        Self {
            fields: CreateIssueFields {
                project: KeyRef {
                    key: project_key.to_string(),
                },
                summary: summary.to_string(),
                description: description.to_string(),
                issue_type: NameRef {
                    name: issue_type.to_string(),
                },
                parent: Some(KeyRef {
                    key: parent_key.to_string(),
                }),
            },
        }
    }
}

impl CreatedIssue {
    /// The created issue, filled in from the request that created it
    ///
    /// Jira only answers with id and key; the title and project are the ones
    /// that were sent.
    pub fn into_issue(self, req: &CreateIssue) -> Issue {
        Issue {
            id: self.id,
            key: self.key,
            fields: IssueFields {
                summary: req.fields.summary.clone(),
                project: Some(ProjectRef {
                    key: req.fields.project.key.clone(),
                }),
            },
        }
    }
}
