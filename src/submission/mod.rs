//! Submission handlers receiving ratings from the widget.
//!
//! The widget knows nothing about how a rating is persisted. It builds a
//! [`RatingSubmission`], hands it to a [`RatingSubmitter`], and only
//! distinguishes "call issued" from "call resolved".
//!
//! # Implementations
//!
//! - [`HttpRatingSubmitter`]: posts JSON to a configured endpoint
//! - [`DryRunSubmitter`]: logs the submission and succeeds

use async_trait::async_trait;
use serde::Serialize;

use crate::rating::{CourseId, CurrentRating, RatingError, StarRating};

mod dry_run;
mod error;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dry_run::DryRunSubmitter;
pub use error::SubmissionError;
pub use http::HttpRatingSubmitter;

/// A rating ready to hand to a submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    course_id: CourseId,
    rating: StarRating,
    comment: String,
}

impl RatingSubmission {
    /// Builds a submission for `course_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NothingSelected`] when `rating` is zero.
    pub fn new(
        course_id: CourseId,
        rating: StarRating,
        comment: impl Into<String>,
    ) -> Result<Self, RatingError> {
        if rating.is_none() {
            return Err(RatingError::NothingSelected);
        }
        Ok(Self {
            course_id,
            rating,
            comment: comment.into(),
        })
    }

    /// Returns the course being rated.
    #[must_use]
    pub const fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the chosen star count, always between one and five.
    #[must_use]
    pub const fn rating(&self) -> StarRating {
        self.rating
    }

    /// Returns the review comment, possibly empty.
    #[must_use]
    pub const fn comment(&self) -> &str {
        self.comment.as_str()
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubmissionReceipt {
    /// New course average reported by the handler, if any.
    pub updated_rating: Option<CurrentRating>,
}

impl SubmissionReceipt {
    /// A receipt carrying a refreshed course average.
    #[must_use]
    pub const fn with_updated_rating(rating: CurrentRating) -> Self {
        Self {
            updated_rating: Some(rating),
        }
    }
}

/// Caller-supplied handler that persists a rating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingSubmitter: Send + Sync {
    /// Submits one rating.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] when the rating could not be stored.
    async fn submit(
        &self,
        submission: &RatingSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> CourseId {
        CourseId::new("rust-101").expect("course id should parse")
    }

    #[test]
    fn submission_requires_a_chosen_rating() {
        let result = RatingSubmission::new(course(), StarRating::NONE, "great");
        assert_eq!(result, Err(RatingError::NothingSelected));
    }

    #[test]
    fn submission_serialises_with_camel_case_fields() {
        let submission = RatingSubmission::new(course(), StarRating::MAX, "Great course")
            .expect("submission should build");

        let json = serde_json::to_value(&submission).expect("submission should serialise");

        assert_eq!(
            json,
            serde_json::json!({
                "courseId": "rust-101",
                "rating": 5,
                "comment": "Great course"
            })
        );
    }
}
