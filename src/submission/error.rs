//! Error types surfaced by rating submission handlers.

use thiserror::Error;

/// Errors returned when a rating submission does not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The configured endpoint could not be parsed.
    #[error("submission endpoint is invalid: {message}")]
    InvalidEndpoint {
        /// Parser detail.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("rating was rejected (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// First line of the response body, or a reason phrase when the
        /// body is blank.
        message: String,
    },

    /// Transport failed before a response arrived.
    #[error("network error while submitting rating: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The handler cannot accept submissions right now.
    #[error("rating submission is unavailable: {message}")]
    Unavailable {
        /// Why the handler refused.
        message: String,
    },
}
