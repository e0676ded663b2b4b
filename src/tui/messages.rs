//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, submission results,
//! and system events.

use crate::rating::StarRating;
use crate::submission::{SubmissionError, SubmissionReceipt};

/// Messages for the course rating TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Summary
    /// The "Write a Review" control was activated.
    OpenReviewForm,

    // Picker pointer events
    /// The pointer entered a picker star.
    PickerEnter(StarRating),
    /// The pointer left the picker row.
    PickerLeave,
    /// A picker star was clicked.
    PickerClick(StarRating),
    /// Move the pointer one star to the right.
    PickerHoverNext,
    /// Move the pointer one star to the left.
    PickerHoverPrevious,
    /// Click the star under the pointer.
    PickerClickHovered,

    // Comment editing
    /// Append a character to the comment.
    CommentInsertChar(char),
    /// Delete the last comment character.
    CommentBackspace,
    /// Move focus between picker and comment.
    ToggleFocus,

    // Form controls
    /// The submit control was activated.
    SubmitReview,
    /// The cancel control was activated.
    CancelReview,

    // Submission results
    /// The submission handler resolved successfully.
    SubmissionSucceeded(SubmissionReceipt),
    /// The submission handler failed.
    SubmissionFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a failure message from a `SubmissionError`.
    #[must_use]
    pub fn from_error(error: &SubmissionError) -> Self {
        Self::SubmissionFailed(error.to_string())
    }

    /// Returns whether this message is handled by the rating widget.
    #[must_use]
    pub const fn is_widget(&self) -> bool {
        matches!(
            self,
            Self::OpenReviewForm
                | Self::PickerEnter(_)
                | Self::PickerLeave
                | Self::PickerClick(_)
                | Self::PickerHoverNext
                | Self::PickerHoverPrevious
                | Self::PickerClickHovered
                | Self::CommentInsertChar(_)
                | Self::CommentBackspace
                | Self::ToggleFocus
                | Self::SubmitReview
                | Self::CancelReview
        )
    }

    /// Returns whether this message carries a submission outcome.
    #[must_use]
    pub const fn is_submission_result(&self) -> bool {
        matches!(
            self,
            Self::SubmissionSucceeded(_) | Self::SubmissionFailed(_)
        )
    }
}
