//! Rendering logic for the course rating TUI application.
//!
//! These are pure query methods that read state without modification.

use super::CourseRatingApp;
use crate::tui::input::InputContext;

impl CourseRatingApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        format!("Course: {}\n", self.course_id)
    }

    /// Renders the status bar with the last status or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        let hints = match self.input_context() {
            InputContext::Summary => "w:write review  ?:help  q:quit",
            InputContext::Picker => {
                "h/l:move  1-5:rate  Space:pick  Tab:comment  Ctrl+S:submit  Esc:cancel"
            }
            InputContext::Comment => "text:edit  Enter:newline  Tab:stars  Ctrl+S:submit  Esc:cancel",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Summary:
  w, Enter   Write a review
  ?          Toggle this help
  q          Quit

Star picker:
  h, Left    Move pointer left
  l, Right   Move pointer right
  1-5        Rate with that many stars
  Space      Rate with the star under the pointer
  Tab        Move to the comment box

Comment:
  text keys  Edit comment
  Enter      New line
  Backspace  Delete one character
  Tab        Return to the star picker

Form:
  Ctrl+S     Submit rating
  Esc        Cancel and close the form
  Ctrl+C     Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
