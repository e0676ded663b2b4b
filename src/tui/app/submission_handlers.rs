//! Handlers for submission outcomes reported by the widget's command.

use bubbletea_rs::Cmd;

use super::CourseRatingApp;
use crate::submission::SubmissionReceipt;
use crate::tui::messages::AppMsg;

const SUBMITTED_STATUS: &str = "Thanks! Your rating was submitted.";

impl CourseRatingApp {
    /// Forwards a submission outcome to the widget and updates host state.
    pub(super) fn handle_submission_result(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let cmd = self.widget.handle_message(msg, &self.course_id);
        match msg {
            AppMsg::SubmissionSucceeded(receipt) => self.handle_submission_succeeded(*receipt),
            AppMsg::SubmissionFailed(reason) => self.handle_submission_failed(reason),
            _ => {}
        }
        cmd
    }

    /// The form shows failures itself; a hidden form needs the status bar.
    fn handle_submission_failed(&mut self, reason: &str) {
        if !self.widget.form().is_visible() {
            self.status = Some(format!("Submission failed: {reason}"));
        }
    }

    fn handle_submission_succeeded(&mut self, receipt: SubmissionReceipt) {
        if let Some(updated) = receipt.updated_rating {
            tracing::debug!(
                course_id = %self.course_id,
                average = updated.value(),
                "handler reported updated average"
            );
            self.current_rating = updated;
        }
        self.status = Some(SUBMITTED_STATUS.to_owned());
    }
}
