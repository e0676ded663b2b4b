//! Host application model implementing the MVU pattern.
//!
//! The host owns the course identifier and the displayed average and passes
//! both to the rating widget on every update and render. Terminal size and
//! the help overlay live here too.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport handling
//! - `rendering`: View rendering methods for terminal output
//! - `lifecycle_handlers`: Quit, help, and resize handling
//! - `submission_handlers`: Submission outcome handling

use bubbletea_rs::Cmd;

use super::components::RatingWidget;
use super::messages::AppMsg;
use super::state::ReviewFormState;
use crate::rating::{CourseId, CurrentRating};

mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod submission_handlers;

/// Host application model for the course rating TUI.
#[derive(Debug)]
pub struct CourseRatingApp {
    /// Course being rated.
    course_id: CourseId,
    /// Average shown in the summary row.
    current_rating: CurrentRating,
    /// The star rating widget.
    widget: RatingWidget,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Message shown in the status bar, if any.
    pub(crate) status: Option<String>,
}

impl CourseRatingApp {
    /// Creates a new application for `course_id` showing `current_rating`.
    #[must_use]
    pub const fn new(
        course_id: CourseId,
        current_rating: CurrentRating,
        widget: RatingWidget,
    ) -> Self {
        Self {
            course_id,
            current_rating,
            widget,
            width: 80,
            height: 24,
            show_help: false,
            status: None,
        }
    }

    /// Returns the course being rated.
    #[must_use]
    pub const fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the average shown in the summary row.
    #[must_use]
    pub const fn current_rating(&self) -> CurrentRating {
        self.current_rating
    }

    /// Supplies a new average; the next frame shows it.
    pub const fn set_current_rating(&mut self, rating: CurrentRating) {
        self.current_rating = rating;
    }

    /// Returns the widget's review form state.
    #[must_use]
    pub const fn form(&self) -> &ReviewFormState {
        self.widget.form()
    }

    /// Returns the status bar message, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the help overlay is shown.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Widget messages go to the rating widget together with the course
    /// identifier. Submission outcomes go to the widget first, then update
    /// host state.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_widget() {
            self.status = None;
            return self.widget.handle_message(msg, &self.course_id);
        }
        if msg.is_submission_result() {
            return self.handle_submission_result(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}
