//! Loader configuration
//!
//! Tracker connection, input/output locations and sub-task settings. Built
//! from command-line flags (with environment fallbacks) in `main`.

use std::path::PathBuf;
use std::time::Duration;

/// Default Jira base URL
pub const DEFAULT_JIRA_URL: &str = "http://localhost:8080";

/// Issue type used for sub-tasks created on the fly
pub const DEFAULT_SUBTASK_ISSUE_TYPE: &str = "Sub-task";

/// Description given to sub-tasks created on the fly
pub const DEFAULT_SUBTASK_DESCRIPTION: &str = "Automatically created by worklog loader";

/// Loader configuration
#[derive(Clone)]
pub struct Config {
    /// Jira base URL (e.g., "http://localhost:8080")
    pub jira_url: String,

    /// Jira username
    pub username: String,

    /// Jira password or API token
    pub password: String,

    /// Directory scanned for `*.csv` input files
    pub work_dir: PathBuf,

    /// Root below which each run gets its own directory
    pub run_dir: PathBuf,

    /// Issue type name for created sub-tasks
    pub subtask_issue_type: String,

    /// Description for created sub-tasks
    pub subtask_description: String,

    /// Per-request HTTP timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration with defaults for everything but credentials
    pub fn new(username: String, password: String) -> Self {
        Self {
            jira_url: DEFAULT_JIRA_URL.to_string(),
            username,
            password,
            work_dir: PathBuf::from("."),
            run_dir: PathBuf::from("runs"),
            subtask_issue_type: DEFAULT_SUBTASK_ISSUE_TYPE.to_string(),
            subtask_description: DEFAULT_SUBTASK_DESCRIPTION.to_string(),
            request_timeout: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.username.is_empty() {
            anyhow::bail!("username cannot be empty");
        }

        if self.password.is_empty() {
            anyhow::bail!("password cannot be empty");
        }

        if self.jira_url.is_empty() {
            anyhow::bail!("jira_url cannot be empty");
        }

        if !self.jira_url.starts_with("http://") && !self.jira_url.starts_with("https://") {
            anyhow::bail!("jira_url must start with http:// or https://");
        }

        if self.subtask_issue_type.trim().is_empty() {
            anyhow::bail!("subtask_issue_type cannot be empty");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jira_url", &self.jira_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("work_dir", &self.work_dir)
            .field("run_dir", &self.run_dir)
            .field("subtask_issue_type", &self.subtask_issue_type)
            .field("subtask_description", &self.subtask_description)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("admin".to_string(), "admin".to_string())
    }

    #[test]
    fn test_default_config() {
        let config = config();
        assert_eq!(config.jira_url, "http://localhost:8080");
        assert_eq!(config.subtask_issue_type, "Sub-task");
        assert_eq!(config.request_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();

        config.username = String::new();
        assert!(config.validate().is_err());
        config.username = "admin".to_string();

        config.password = String::new();
        assert!(config.validate().is_err());
        config.password = "admin".to_string();

        config.jira_url = "jira.example.com".to_string();
        assert!(config.validate().is_err());

        config.jira_url = "https://jira.example.com".to_string();
        assert!(config.validate().is_ok());

        config.subtask_issue_type = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let mut config = config();
        config.password = "hunter2".to_string();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
