//! Submission handler used when no endpoint is configured.

use async_trait::async_trait;

use super::{RatingSubmission, RatingSubmitter, SubmissionError, SubmissionReceipt};

/// Logs each submission and reports success without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunSubmitter;

#[async_trait]
impl RatingSubmitter for DryRunSubmitter {
    async fn submit(
        &self,
        submission: &RatingSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::info!(
            course_id = %submission.course_id(),
            rating = submission.rating().get(),
            comment_chars = submission.comment().chars().count(),
            "dry-run rating submission accepted"
        );
        Ok(SubmissionReceipt::default())
    }
}
