//! Batch outcome types
//!
//! A batch never aborts on a bad row. Each row ends up as a [`RowOutcome`]
//! and the ordered list of them is the audit trail of the batch.

use thiserror::Error;

use crate::error::{ParseError, TrackerError};

/// Why a row failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowFailure {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Success,
    Failed(RowFailure),
}

/// Result of processing a single input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// 1-based line of the input file the row starts on
    pub row_index: usize,
    pub status: RowStatus,
}

impl RowOutcome {
    pub fn success(row_index: usize) -> Self {
        Self {
            row_index,
            status: RowStatus::Success,
        }
    }

    pub fn failed(row_index: usize, failure: impl Into<RowFailure>) -> Self {
        Self {
            row_index,
            status: RowStatus::Failed(failure.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, RowStatus::Success)
    }

    /// User-facing detail: empty on success, the failure reason otherwise
    pub fn detail(&self) -> String {
        match &self.status {
            RowStatus::Success => String::new(),
            RowStatus::Failed(failure) => failure.to_string(),
        }
    }
}

/// Ordered per-row results of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    rows: Vec<RowOutcome>,
}

impl RunOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RowOutcome) {
        self.rows.push(outcome);
    }

    /// All row outcomes, in input order
    pub fn rows(&self) -> &[RowOutcome] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Failed rows, in input order
    pub fn failures(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|row| !row.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Batch status: success iff no row failed
    pub fn is_success(&self) -> bool {
        self.rows.iter().all(RowOutcome::is_success)
    }
}

impl FromIterator<RowOutcome> for RunOutcome {
    fn from_iter<I: IntoIterator<Item = RowOutcome>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Renders `Success`, or `Failures:` followed by one numbered line per
/// failed row.
impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            return write!(f, "Success");
        }

        write!(f, "Failures:")?;
        for (n, row) in self.failures().enumerate() {
            write!(f, "\n  {}. row {}: {}", n + 1, row.row_index, row.detail())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outcome_is_success() {
        let outcome = RunOutcome::new();
        assert!(outcome.is_success());
        assert!(outcome.is_empty());
        assert_eq!(outcome.to_string(), "Success");
    }

    #[test]
    fn test_any_failure_fails_the_batch() {
        let outcome: RunOutcome = vec![
            RowOutcome::success(1),
            RowOutcome::failed(
                2,
                ParseError::MalformedRow {
                    expected: 6,
                    found: 5,
                },
            ),
            RowOutcome::success(3),
        ]
        .into_iter()
        .collect();

        assert!(!outcome.is_success());
        assert_eq!(outcome.len(), 3);
        assert_eq!(outcome.failure_count(), 1);
        assert_eq!(outcome.failures().next().unwrap().row_index, 2);
    }

    #[test]
    fn test_failure_summary_lists_failed_rows() {
        let outcome: RunOutcome = vec![
            RowOutcome::failed(1, TrackerError::NotFound("TEST-9".to_string())),
            RowOutcome::success(2),
            RowOutcome::failed(3, ParseError::BadTimestamp("yesterday".to_string())),
        ]
        .into_iter()
        .collect();

        let summary = outcome.to_string();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Failures:");
        assert_eq!(lines[1], "  1. row 1: Issue not found: TEST-9");
        assert!(lines[2].starts_with("  2. row 3: Wrong format: start time 'yesterday'"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_detail_is_empty_on_success() {
        assert_eq!(RowOutcome::success(1).detail(), "");
    }
}
