//! UI components for the rating widget.
//!
//! Components follow the bubbletea-rs Model-View pattern: view functions
//! take a context struct and return rendered text, while
//! [`RatingWidget`] owns the widget's local state and submission handler.

mod rating_summary;
mod rating_widget;
mod review_form;
mod star_glyph;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use rating_summary::{RatingSummaryComponent, RatingSummaryViewContext};
pub use rating_widget::{RatingWidget, RatingWidgetViewContext};
pub use review_form::{ReviewFormComponent, ReviewFormViewContext, WRITE_REVIEW_LABEL};
pub use star_glyph::{EMPTY_STAR, FILLED_STAR, StarGlyph, render_star_row, star_row};
