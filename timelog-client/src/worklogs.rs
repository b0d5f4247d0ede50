//! Worklog API endpoints

use reqwest::Method;
use timelog_core::dto::worklog::{CreateWorklog, Worklog};
use tracing::debug;

use crate::JiraClient;
use crate::error::{ClientError, Result};

impl JiraClient {
    /// Add a worklog to an issue
    ///
    /// # Arguments
    /// * `issue_key` - Key of the issue to log against
    /// * `req` - Duration, start time and comment
    ///
    /// # Returns
    /// The created worklog
    ///
    /// # Example
    /// ```no_run
    /// # use timelog_client::JiraClient;
    /// # use timelog_core::dto::worklog::CreateWorklog;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JiraClient::new("http://localhost:8080").with_basic_auth("admin", "admin");
    /// let started = chrono::DateTime::parse_from_rfc3339("2024-01-15T09:00:00+00:00")?;
    /// client
    ///     .add_worklog("TEST-1", &CreateWorklog::new("30m", &started, "Automated worklog loader"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_worklog(&self, issue_key: &str, req: &CreateWorklog) -> Result<Worklog> {
        if req.time_spent.trim().is_empty() {
            return Err(ClientError::InvalidRequest(format!(
                "empty duration for worklog on {}",
                issue_key
            )));
        }

        debug!("Adding worklog of {} to {}", req.time_spent, issue_key);
        let response = self
            .request(Method::POST, &["issue", issue_key, "worklog"])?
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
