//! User DTOs

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `/myself`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Server/Data Center username; absent on Cloud
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl CurrentUser {
    /// Best available label for log lines
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.account_id.as_deref())
            .unwrap_or("unknown user")
    }
}
