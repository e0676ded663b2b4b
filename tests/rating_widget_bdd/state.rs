//! Scenario state for rating widget BDD tests.

use bubbletea_rs::Cmd;
use coursestar::submission::test_support::RecordingSubmitter;
use coursestar::tui::CourseRatingApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a rating widget scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct RatingWidgetState {
    /// The host application under test.
    pub(crate) app: Slot<CourseRatingApp>,
    /// Handler recording every submission.
    pub(crate) submitter: Slot<RecordingSubmitter>,
    /// Submission command awaiting execution.
    pub(crate) pending_cmd: Slot<Option<Cmd>>,
}
