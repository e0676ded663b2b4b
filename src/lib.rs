//! Coursestar library crate: a star-based course rating widget.
//!
//! The widget shows a course's average rating as a row of five stars with a
//! numeric label, and offers an inline review form whose star choice and
//! optional comment go to a pluggable handler. It runs in the terminal on
//! bubbletea-rs.
//!
//! # Modules
//!
//! - [`rating`]: Course identifiers, averages, and star counts
//! - [`submission`]: The handler trait and its HTTP and dry-run implementations
//! - [`theme`]: Light and dark presentation styles
//! - [`tui`]: The widget, its host application, and key mapping
//! - [`config`]: Layered configuration via ortho-config
//! - [`logging`]: File-backed `tracing` output

pub mod config;
pub mod error;
pub mod logging;
pub mod rating;
pub mod submission;
pub mod theme;
pub mod tui;

pub use config::CourseRatingConfig;
pub use error::AppError;
pub use rating::{CourseId, CurrentRating, MAX_STARS, RatingError, StarRating};
pub use submission::{
    DryRunSubmitter, HttpRatingSubmitter, RatingSubmission, RatingSubmitter, SubmissionError,
    SubmissionReceipt,
};
pub use theme::{Theme, ThemeMode};
