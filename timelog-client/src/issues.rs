//! Issue-related API endpoints

use reqwest::Method;
use timelog_core::Issue;
use timelog_core::dto::issue::{CreateIssue, CreatedIssue};
use timelog_core::dto::search::SearchResults;
use tracing::debug;

use crate::JiraClient;
use crate::error::Result;

/// Page size requested from the search endpoint
const SEARCH_PAGE_SIZE: usize = 50;

/// Fields fetched for every issue
const ISSUE_FIELDS: &str = "summary,project";

impl JiraClient {
    // =============================================================================
    // Issue Lookup
    // =============================================================================

    /// Get an issue by key
    ///
    /// # Arguments
    /// * `key` - The issue key (e.g., "TEST-1")
    ///
    /// # Returns
    /// The issue with its summary and project
    pub async fn get_issue(&self, key: &str) -> Result<Issue> {
        debug!("Fetching issue {}", key);
        let response = self
            .request(Method::GET, &["issue", key])?
            .query(&[("fields", ISSUE_FIELDS)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Run a JQL search and collect every page
    ///
    /// Issues are returned in the order the server produced them. Paging
    /// stops once `total` issues were read or the server returns an empty
    /// page.
    ///
    /// # Arguments
    /// * `jql` - The JQL query
    pub async fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut start_at = 0;

        loop {
            debug!("Searching issues: {} (startAt={})", jql, start_at);
            let response = self
                .request(Method::GET, &["search"])?
                .query(&[
                    ("jql", jql.to_string()),
                    ("startAt", start_at.to_string()),
                    ("maxResults", SEARCH_PAGE_SIZE.to_string()),
                    ("fields", ISSUE_FIELDS.to_string()),
                ])
                .send()
                .await?;

            let page: SearchResults = self.handle_response(response).await?;
            let fetched = page.issues.len();
            issues.extend(page.issues);
            start_at += fetched;

            if fetched == 0 || start_at >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    /// List the sub-tasks of an issue
    ///
    /// # Arguments
    /// * `parent_key` - Key of the parent issue
    pub async fn search_subtasks(&self, parent_key: &str) -> Result<Vec<Issue>> {
        self.search_issues(&subtasks_jql(parent_key)).await
    }

    // =============================================================================
    // Issue Creation
    // =============================================================================

    /// Create an issue
    ///
    /// # Arguments
    /// * `req` - The issue creation request
    ///
    /// # Returns
    /// The id and key of the created issue
    pub async fn create_issue(&self, req: &CreateIssue) -> Result<CreatedIssue> {
        debug!("Creating issue '{}'", req.fields.summary);
        let response = self
            .request(Method::POST, &["issue"])?
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}

/// JQL selecting the direct sub-tasks of `parent_key`
fn subtasks_jql(parent_key: &str) -> String {
    format!("parent = \"{}\"", parent_key.replace('"', "\\\""))
}
