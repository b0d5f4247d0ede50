//! Session endpoints

use reqwest::Method;
use timelog_core::dto::user::CurrentUser;

use crate::JiraClient;
use crate::error::Result;

impl JiraClient {
    /// Get the authenticated user
    ///
    /// Used to verify the server is reachable and the credentials are
    /// accepted before any work starts.
    ///
    /// # Example
    /// ```no_run
    /// # use timelog_client::JiraClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JiraClient::new("http://localhost:8080").with_basic_auth("admin", "admin");
    /// let user = client.myself().await?;
    /// println!("Logged in as {}", user.label());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn myself(&self) -> Result<CurrentUser> {
        let response = self.request(Method::GET, &["myself"])?.send().await?;

        self.handle_response(response).await
    }
}
