//! State management for the rating widget.
//!
//! This module provides the local interactive state the widget owns while
//! the review form is being authored.

mod review_form;

pub use review_form::{FormFocus, ReviewFormState, SubmitRequest};
