//! Terminal User Interface for the course rating widget.
//!
//! This module provides an interactive TUI that shows a course's average
//! rating and lets the user submit a star rating with an optional comment,
//! using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Host state in [`app::CourseRatingApp`], widget state in
//!   [`components::RatingWidget`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Host application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Review form state
//! - [`components`]: Star glyphs, summary row, and review form
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for start-up data. Call
//! [`set_widget_context`] before starting the program, and
//! `CourseRatingApp::init()` will retrieve it.

use std::sync::{Arc, OnceLock};

use crate::rating::{CourseId, CurrentRating};
use crate::submission::RatingSubmitter;
use crate::theme::Theme;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::CourseRatingApp;

/// Global storage for the widget's start-up context.
///
/// This is set before the TUI program starts and read by
/// `CourseRatingApp::init()`.
static WIDGET_CONTEXT: OnceLock<WidgetContext> = OnceLock::new();

/// Host inputs and collaborators needed to build the widget.
#[derive(Clone)]
pub struct WidgetContext {
    /// Course being rated.
    pub course_id: CourseId,
    /// Average shown in the summary row at start-up.
    pub current_rating: CurrentRating,
    /// Presentation theme.
    pub theme: Theme,
    /// Handler receiving submitted ratings.
    pub submitter: Arc<dyn RatingSubmitter>,
}

impl std::fmt::Debug for WidgetContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetContext")
            .field("course_id", &self.course_id)
            .field("current_rating", &self.current_rating)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// Sets the start-up context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_widget_context(context: WidgetContext) -> bool {
    WIDGET_CONTEXT.set(context).is_ok()
}

/// Gets a clone of the start-up context, if one was set.
pub(crate) fn get_widget_context() -> Option<WidgetContext> {
    WIDGET_CONTEXT.get().cloned()
}
