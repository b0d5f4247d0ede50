//! Batch runner
//!
//! Replays the rows of one input file, strictly one after another. A row
//! that fails to parse or to commit is recorded and the batch moves on; the
//! returned [`RunOutcome`] always has one entry per input row, in input
//! order, numbered by the file line each row starts on.

use std::sync::Arc;
use timelog_core::{LogRequest, RowFailure, RowOutcome, RunOutcome, parse_row};
use tracing::{Instrument, error, info, info_span};

use crate::service::committer::WorklogCommitter;
use crate::service::resolver::{SubtaskCache, SubtaskResolver};
use crate::source::RawRow;
use crate::tracker::Tracker;

/// Runs batches of worklog rows against a tracker
pub struct BatchRunner {
    committer: WorklogCommitter,
}

impl BatchRunner {
    /// Creates a new batch runner
    ///
    /// # Arguments
    /// * `tracker` - The tracker to replay rows against
    /// * `subtask_description` - Description for sub-tasks created on the fly
    pub fn new(tracker: Arc<dyn Tracker>, subtask_description: impl Into<String>) -> Self {
        let resolver = SubtaskResolver::new(tracker.clone(), subtask_description);
        Self {
            committer: WorklogCommitter::new(tracker, resolver),
        }
    }

    /// Processes every row and returns the per-row ledger
    ///
    /// Each call starts with an empty [`SubtaskCache`], so sub-task
    /// creation is deduplicated within one batch only.
    pub async fn run(&self, rows: &[RawRow]) -> RunOutcome {
        let mut cache = SubtaskCache::new();
        let mut outcome = RunOutcome::new();

        for row in rows {
            let row_index = row.line;

            let row_outcome = async {
                match self.process_row(&row.fields, &mut cache).await {
                    Ok(()) => {
                        info!("OK");
                        RowOutcome::success(row_index)
                    }
                    Err(failure) => {
                        error!("{}", failure);
                        RowOutcome::failed(row_index, failure)
                    }
                }
            }
            .instrument(info_span!("row", row = row_index))
            .await;

            outcome.record(row_outcome);
        }

        outcome
    }

    async fn process_row(
        &self,
        fields: &[String],
        cache: &mut SubtaskCache,
    ) -> Result<(), RowFailure> {
        let request = parse_row(fields)?;
        log_entry(&request);

        self.committer.commit(&request, cache).await?;
        Ok(())
    }
}

fn log_entry(request: &LogRequest) {
    info!(
        "Logging entry: {}, {}, {}, {}, {}",
        request.issue_key,
        request.summary,
        request.duration,
        request.started_at,
        request.comment
    );
}
