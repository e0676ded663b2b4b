//! Local interactive state of the review form.
//!
//! This module holds everything the widget owns: the selected and hovered
//! star, the comment draft, form visibility, keyboard focus, and the
//! submission lifecycle. The course identifier and displayed average belong
//! to the host and are never stored here.

use crate::rating::{CourseId, StarRating, fill_level};
use crate::submission::RatingSubmission;

/// Which part of the open form receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// The five-star picker.
    #[default]
    Picker,
    /// The multi-line comment box.
    Comment,
}

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// No star is selected; the request is silently ignored.
    NothingSelected,
    /// A submission is already awaiting the handler.
    AlreadyInFlight,
    /// The form is hidden, so there is nothing to submit.
    FormHidden,
    /// The handler should be invoked with this submission.
    Dispatch(RatingSubmission),
}

/// Review form state owned by the rating widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewFormState {
    selected: StarRating,
    hover: StarRating,
    comment: String,
    visible: bool,
    focus: FormFocus,
    in_flight: bool,
    failure: Option<String>,
}

impl ReviewFormState {
    /// Creates a hidden, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed star selection.
    #[must_use]
    pub const fn selected(&self) -> StarRating {
        self.selected
    }

    /// Returns the star under the pointer.
    #[must_use]
    pub const fn hover(&self) -> StarRating {
        self.hover
    }

    /// Returns the comment draft.
    #[must_use]
    pub const fn comment(&self) -> &str {
        self.comment.as_str()
    }

    /// Returns whether the form is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns which part of the form has focus.
    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Returns whether a submission is awaiting the handler.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns the message of the last failed submission, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Returns the picker fill level for the current frame.
    #[must_use]
    pub fn picker_fill(&self) -> StarRating {
        fill_level(self.hover, self.selected)
    }

    /// Shows the form with focus on the picker.
    ///
    /// A failure that arrived while the form was hidden stays visible.
    pub const fn open(&mut self) {
        self.visible = true;
        self.focus = FormFocus::Picker;
    }

    /// Hides the form, keeping the draft for the next time it opens.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.hover = StarRating::NONE;
        self.failure = None;
    }

    /// Moves the pointer onto picker star `star`.
    pub const fn pointer_enter(&mut self, star: StarRating) {
        self.hover = star;
    }

    /// Moves the pointer off the picker row.
    pub const fn pointer_leave(&mut self) {
        self.hover = StarRating::NONE;
    }

    /// Commits `star` as the selection. Ignored while the form is hidden.
    pub fn click(&mut self, star: StarRating) {
        if !self.visible {
            return;
        }
        self.selected = star;
        self.failure = None;
    }

    /// Returns the star keyboard pointer moves start from: the hovered star,
    /// or the selection when nothing is hovered.
    #[must_use]
    pub const fn pointer_origin(&self) -> StarRating {
        if self.hover.is_none() {
            self.selected
        } else {
            self.hover
        }
    }

    /// Appends one character to the comment.
    pub fn insert_char(&mut self, character: char) {
        self.comment.push(character);
        self.failure = None;
    }

    /// Removes the last character of the comment, if present.
    pub fn backspace(&mut self) {
        self.comment.pop();
        self.failure = None;
    }

    /// Replaces the whole comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
        self.failure = None;
    }

    /// Toggles focus between picker and comment.
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::Picker => FormFocus::Comment,
            FormFocus::Comment => FormFocus::Picker,
        };
    }

    /// Validates the draft and marks it in flight when dispatchable.
    pub fn request_submit(&mut self, course_id: &CourseId) -> SubmitRequest {
        if !self.visible {
            return SubmitRequest::FormHidden;
        }
        if self.in_flight {
            return SubmitRequest::AlreadyInFlight;
        }

        match RatingSubmission::new(course_id.clone(), self.selected, self.comment.clone()) {
            Ok(submission) => {
                self.in_flight = true;
                self.failure = None;
                SubmitRequest::Dispatch(submission)
            }
            Err(_) => SubmitRequest::NothingSelected,
        }
    }

    /// Resets the form after the handler resolved successfully.
    pub fn complete_submission(&mut self) {
        *self = Self::default();
    }

    /// Keeps the draft open and records why the handler failed.
    pub fn fail_submission(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.failure = Some(message.into());
    }
}
