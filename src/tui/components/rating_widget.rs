//! Course rating widget composing the summary row and the review form.
//!
//! The widget owns its interactive state and the submission handler. The
//! course identifier and the displayed average are supplied by the host on
//! every update and render, so the widget never caches them.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::rating::{CourseId, CurrentRating, StarRating};
use crate::submission::{RatingSubmission, RatingSubmitter};
use crate::theme::Theme;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormFocus, ReviewFormState, SubmitRequest};

use super::rating_summary::{RatingSummaryComponent, RatingSummaryViewContext};
use super::review_form::{ReviewFormComponent, ReviewFormViewContext};
use super::star_glyph::StarGlyph;

/// Context for rendering the rating widget.
#[derive(Debug, Clone, Copy)]
pub struct RatingWidgetViewContext {
    /// Host-supplied average shown in the summary row.
    pub current_rating: CurrentRating,
    /// Available terminal width in columns.
    pub max_width: usize,
}

/// Star rating widget with an inline review form.
pub struct RatingWidget {
    theme: Theme,
    submitter: Arc<dyn RatingSubmitter>,
    form: ReviewFormState,
}

impl fmt::Debug for RatingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("theme", &self.theme)
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

impl RatingWidget {
    /// Creates a widget with a hidden, empty form.
    #[must_use]
    pub fn new(theme: Theme, submitter: Arc<dyn RatingSubmitter>) -> Self {
        Self {
            theme,
            submitter,
            form: ReviewFormState::new(),
        }
    }

    /// Returns the review form state.
    #[must_use]
    pub const fn form(&self) -> &ReviewFormState {
        &self.form
    }

    /// Applies a widget message, returning the submission command when one
    /// is dispatched.
    pub fn handle_message(&mut self, msg: &AppMsg, course_id: &CourseId) -> Option<Cmd> {
        match msg {
            AppMsg::OpenReviewForm => self.form.open(),
            AppMsg::PickerEnter(_) | AppMsg::PickerLeave | AppMsg::PickerClick(_) => {
                self.apply_pointer_event(msg);
            }
            AppMsg::PickerHoverNext => {
                let target = self.form.pointer_origin().step_forward();
                self.apply_pointer_event(&self.picker_glyph(target).on_enter());
            }
            AppMsg::PickerHoverPrevious => {
                let target = self.form.pointer_origin().step_back();
                self.apply_pointer_event(&self.picker_glyph(target).on_enter());
            }
            AppMsg::PickerClickHovered => {
                if let Some(glyph) = self.hovered_glyph() {
                    self.apply_pointer_event(&glyph.on_click());
                }
            }
            AppMsg::CommentInsertChar(character) => self.form.insert_char(*character),
            AppMsg::CommentBackspace => self.form.backspace(),
            AppMsg::ToggleFocus => self.toggle_focus(),
            AppMsg::SubmitReview => return self.handle_submit(course_id),
            AppMsg::CancelReview => self.form.cancel(),
            AppMsg::SubmissionSucceeded(_) => {
                tracing::info!(course_id = %course_id, "rating submission accepted");
                self.form.complete_submission();
            }
            AppMsg::SubmissionFailed(reason) => {
                tracing::warn!(course_id = %course_id, reason = %reason, "rating submission failed");
                self.form.fail_submission(reason.clone());
            }
            _ => {}
        }
        None
    }

    /// Applies a pointer hook emitted by a picker glyph.
    fn apply_pointer_event(&mut self, event: &AppMsg) {
        match event {
            AppMsg::PickerEnter(star) => self.form.pointer_enter(*star),
            AppMsg::PickerLeave => self.form.pointer_leave(),
            AppMsg::PickerClick(star) => self.form.click(*star),
            _ => {}
        }
    }

    fn picker_glyph(&self, star: StarRating) -> StarGlyph {
        StarGlyph::new(star, self.form.picker_fill().fills(star.get()))
    }

    fn hovered_glyph(&self) -> Option<StarGlyph> {
        let hover = self.form.hover();
        (!hover.is_none()).then(|| self.picker_glyph(hover))
    }

    /// Moving focus off the picker takes the pointer off the hovered star.
    fn toggle_focus(&mut self) {
        if self.form.focus() == FormFocus::Picker
            && let Some(glyph) = self.hovered_glyph()
        {
            self.apply_pointer_event(&glyph.on_leave());
        }
        self.form.toggle_focus();
    }

    fn handle_submit(&mut self, course_id: &CourseId) -> Option<Cmd> {
        match self.form.request_submit(course_id) {
            SubmitRequest::Dispatch(submission) => {
                tracing::info!(
                    course_id = %submission.course_id(),
                    rating = submission.rating().get(),
                    "submitting course rating"
                );
                Some(spawn_submission(Arc::clone(&self.submitter), submission))
            }
            SubmitRequest::NothingSelected => {
                tracing::debug!("submit ignored: no star selected");
                None
            }
            SubmitRequest::AlreadyInFlight => {
                tracing::debug!("submit ignored: submission already in flight");
                None
            }
            SubmitRequest::FormHidden => None,
        }
    }

    /// Renders the summary row followed by the trigger or the form.
    #[must_use]
    pub fn view(&self, ctx: &RatingWidgetViewContext) -> String {
        let mut output = RatingSummaryComponent::view(&RatingSummaryViewContext {
            current_rating: ctx.current_rating,
            theme: &self.theme,
        });
        output.push_str(&ReviewFormComponent::view(&ReviewFormViewContext {
            state: &self.form,
            theme: &self.theme,
            max_width: ctx.max_width,
        }));
        output
    }
}

fn spawn_submission(submitter: Arc<dyn RatingSubmitter>, submission: RatingSubmission) -> Cmd {
    Box::pin(async move {
        let msg = match submitter.submit(&submission).await {
            Ok(receipt) => AppMsg::SubmissionSucceeded(receipt),
            Err(error) => AppMsg::from_error(&error),
        };
        Some(Box::new(msg) as Box<dyn Any + Send>)
    })
}
