//! Support modules for rating widget BDD tests.

pub(crate) mod state;

pub(crate) use state::RatingWidgetState;
