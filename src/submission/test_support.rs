//! Recording submission handler for tests.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::{RatingSubmission, RatingSubmitter, SubmissionError, SubmissionReceipt};

/// Records every submission and answers with a fixed outcome.
#[derive(Debug, Clone)]
pub struct RecordingSubmitter {
    calls: Arc<Mutex<Vec<RatingSubmission>>>,
    outcome: Result<SubmissionReceipt, SubmissionError>,
}

impl Default for RecordingSubmitter {
    fn default() -> Self {
        Self::succeeding(SubmissionReceipt::default())
    }
}

impl RecordingSubmitter {
    /// A submitter that accepts every rating with `receipt`.
    #[must_use]
    pub fn succeeding(receipt: SubmissionReceipt) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(receipt),
        }
    }

    /// A submitter that rejects every rating with `error`.
    #[must_use]
    pub fn failing(error: SubmissionError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(error),
        }
    }

    /// Returns a copy of the submissions received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RatingSubmission> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many submissions were received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl RatingSubmitter for RecordingSubmitter {
    async fn submit(
        &self,
        submission: &RatingSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        self.outcome.clone()
    }
}
