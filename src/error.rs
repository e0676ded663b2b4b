//! Error types surfaced by the rating CLI.

use thiserror::Error;

use crate::rating::RatingError;
use crate::submission::SubmissionError;

/// Errors raised while configuring or running the rating widget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// No course identifier was supplied.
    #[error("course id is required (use --course-id or COURSESTAR_COURSE_ID)")]
    MissingCourseId,

    /// A rating value was invalid.
    #[error("invalid rating input: {0}")]
    Rating(#[from] RatingError),

    /// The configured current rating was outside `0..=5` or not a number.
    #[error("current rating must be a number between 0 and 5, got {value}")]
    InvalidCurrentRating {
        /// The rejected value, formatted for display.
        value: String,
    },

    /// The configured theme name was not recognised.
    #[error("unknown theme '{value}': expected 'light' or 'dark'")]
    InvalidTheme {
        /// The rejected theme name.
        value: String,
    },

    /// The configured log level was not recognised.
    #[error("unknown log level '{value}': expected trace, debug, info, warn, or error")]
    InvalidLogLevel {
        /// The rejected level name.
        value: String,
    },

    /// The submission handler could not be created.
    #[error("submission handler error: {0}")]
    Submission(#[from] SubmissionError),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The log subscriber could not be installed.
    #[error("logging setup failed: {message}")]
    Logging {
        /// Details about the logging failure.
        message: String,
    },

    /// The terminal program failed.
    #[error("TUI error: {message}")]
    Terminal {
        /// Error detail from the terminal framework.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
