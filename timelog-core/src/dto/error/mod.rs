//! Tracker error body

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error payload Jira attaches to 4xx/5xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCollection {
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ErrorCollection {
    /// Flattens the payload into one line, or `None` if it carries nothing
    ///
    /// Field errors are rendered as `field: message`, sorted by field.
    pub fn message(&self) -> Option<String> {
        let parts: Vec<String> = self
            .error_messages
            .iter()
            .cloned()
            .chain(
                self.errors
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message)),
            )
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_flattens_both_parts() {
        let body: ErrorCollection = serde_json::from_str(
            r#"{"errorMessages":["Issue does not exist"],"errors":{"timeLogged":"Invalid time duration entered."}}"#,
        )
        .unwrap();

        assert_eq!(
            body.message().unwrap(),
            "Issue does not exist; timeLogged: Invalid time duration entered."
        );
    }

    #[test]
    fn test_empty_body_has_no_message() {
        let body: ErrorCollection = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }
}
