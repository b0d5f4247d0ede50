//! Worklog request domain types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Target of a worklog row
///
/// A direct key is a tracker-native identifier (`TEST-1`). A composite key
/// (`TEST-1/A`) names a virtual sub-task of `TEST-1` whose title starts
/// with `A`; it is resolved against the tracker at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKey {
    Direct(String),
    Composite(CompositeKey),
}

/// `parent/child` pair identifying a sub-task by title prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeKey {
    pub parent: String,
    pub child: String,
}

impl IssueKey {
    /// Parse an issue key, splitting on the first `/`
    ///
    /// Everything after the first `/` belongs to the child token, so
    /// `TEST-1/A/B` has parent `TEST-1` and child `A/B`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::MissingIssueKey);
        }

        match input.split_once('/') {
            None => Ok(IssueKey::Direct(input.to_string())),
            Some((parent, child)) => {
                let parent = parent.trim();
                let child = child.trim();
                if parent.is_empty() || child.is_empty() {
                    return Err(ParseError::BadIssueKey(input.to_string()));
                }
                Ok(IssueKey::Composite(CompositeKey {
                    parent: parent.to_string(),
                    child: child.to_string(),
                }))
            }
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, IssueKey::Composite(_))
    }
}

impl std::fmt::Display for IssueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKey::Direct(key) => write!(f, "{}", key),
            IssueKey::Composite(key) => write!(f, "{}", key),
        }
    }
}

impl std::fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.parent, self.child)
    }
}

/// One parsed input row
///
/// Immutable once parsed; owned by the row that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    pub issue_key: IssueKey,
    pub summary: String,
    /// Tracker-native duration syntax, e.g. `30m` or `1h 30m`
    pub duration: String,
    pub started_at: DateTime<FixedOffset>,
    pub author: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direct_key() {
        let key = IssueKey::parse("TEST-1").unwrap();
        assert_eq!(key, IssueKey::Direct("TEST-1".to_string()));
        assert!(!key.is_composite());
    }

    #[test]
    fn test_parse_composite_key() {
        let key = IssueKey::parse("TEST-1/A").unwrap();
        assert_eq!(
            key,
            IssueKey::Composite(CompositeKey {
                parent: "TEST-1".to_string(),
                child: "A".to_string(),
            })
        );
        assert_eq!(key.to_string(), "TEST-1/A");
    }

    #[test]
    fn test_parse_splits_on_first_slash() {
        let key = IssueKey::parse("TEST-1/A/B").unwrap();
        match key {
            IssueKey::Composite(composite) => {
                assert_eq!(composite.parent, "TEST-1");
                assert_eq!(composite.child, "A/B");
            }
            other => panic!("expected composite key, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_incomplete_keys() {
        assert_eq!(IssueKey::parse("  "), Err(ParseError::MissingIssueKey));
        assert_eq!(
            IssueKey::parse("TEST-1/"),
            Err(ParseError::BadIssueKey("TEST-1/".to_string()))
        );
        assert_eq!(
            IssueKey::parse("/A"),
            Err(ParseError::BadIssueKey("/A".to_string()))
        );
    }
}
