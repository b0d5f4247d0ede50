//! Timelog Jira Client
//!
//! A small, type-safe HTTP client for the parts of the Jira REST API (v2)
//! the worklog loader needs: the session check, issue lookup, sub-task
//! search, issue creation and worklog creation.
//!
//! # Example
//!
//! ```no_run
//! use timelog_client::JiraClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JiraClient::new("http://localhost:8080").with_basic_auth("admin", "admin");
//!
//!     let issue = client.get_issue("TEST-1").await?;
//!     println!("{}: {}", issue.key, issue.summary());
//!     Ok(())
//! }
//! ```

pub mod error;
mod issues;
mod session;
mod worklogs;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use timelog_core::dto::error::ErrorCollection;

/// Prefix of every REST endpoint
const API_PREFIX: &str = "/rest/api/2";

/// Username/password pair sent as HTTP basic auth
#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// HTTP client for the Jira REST API
///
/// Methods are grouped by concern:
/// - Session (`myself`)
/// - Issues (get, search, create)
/// - Worklogs (add)
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// Base URL of the Jira server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Basic auth credentials, if any
    credentials: Option<Credentials>,
}

impl JiraClient {
    /// Create a new Jira client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Jira server (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use timelog_client::JiraClient;
    ///
    /// let client = JiraClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new Jira client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use timelog_client::JiraClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = JiraClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials: None,
        }
    }

    /// Authenticate every request with HTTP basic auth
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Get the base URL of the Jira server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a REST endpoint
    ///
    /// Each segment is percent-encoded on its own, so an issue key can never
    /// add path segments, a query or a fragment.
    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, API_PREFIX)).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("invalid base URL '{}'", self.base_url))
            })?
            .extend(segments);

        Ok(url)
    }

    /// Start a request with auth and JSON accept headers applied
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let builder = self
            .client
            .request(method, self.api_url(segments)?)
            .header(reqwest::header::ACCEPT, "application/json");

        Ok(match &self.credentials {
            Some(credentials) => {
                builder.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => builder,
        })
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(self.error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Turn a failed response into an [`ClientError::ApiError`]
    ///
    /// Jira's `errorMessages`/`errors` payload is flattened into the message;
    /// a non-JSON body is kept as-is.
    async fn error_from_response(&self, response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ClientError::api_error(status.as_u16(), error_message(status, &body))
    }
}

/// Readable message for a failed response body
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ErrorCollection>(body)
        .ok()
        .and_then(|collection| collection.message())
    {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}
