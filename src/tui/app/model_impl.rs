//! `Model` trait implementation for the course rating TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CourseRatingApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::CourseRatingApp;
use crate::rating::{CourseId, CurrentRating};
use crate::submission::DryRunSubmitter;
use crate::theme::Theme;
use crate::tui::components::{RatingWidget, RatingWidgetViewContext};
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;
use crate::tui::state::FormFocus;

impl Model for CourseRatingApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve start-up context from module-level storage
        let Some(context) = crate::tui::get_widget_context() else {
            tracing::error!("rating widget started without a context");
            let widget = RatingWidget::new(Theme::default(), Arc::new(DryRunSubmitter));
            let mut model = Self::new(CourseId::unconfigured(), CurrentRating::default(), widget);
            model.status = Some("Rating widget is not configured".to_owned());
            return (model, Some(bubbletea_rs::quit()));
        };

        let widget = RatingWidget::new(context.theme, context.submitter);
        let model = Self::new(context.course_id, context.current_rating, widget);
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            let app_msg = map_key_to_message_with_context(key_msg, context);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');

        let ctx = RatingWidgetViewContext {
            current_rating: self.current_rating,
            max_width: usize::from(self.width).saturating_sub(1).max(1),
        };
        output.push_str(&self.widget.view(&ctx));
        output.push('\n');
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl CourseRatingApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        let form = self.widget.form();
        if !form.is_visible() {
            return InputContext::Summary;
        }
        match form.focus() {
            FormFocus::Picker => InputContext::Picker,
            FormFocus::Comment => InputContext::Comment,
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces so shorter rows clear stale cells
    /// left by the previous frame.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_n(blank, missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Clamps `line` to `width` visible columns and pads it with spaces.
///
/// Escape sequences are copied through without counting towards the width.
/// A line carrying ANSI codes always ends in a reset unless its last
/// sequence already was one and nothing was cut.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0_usize;
    let mut escape: Option<String> = None;
    let mut had_ansi = false;
    let mut ended_with_reset = false;
    let mut truncated = false;

    for ch in line.chars() {
        if let Some(sequence) = escape.as_mut() {
            sequence.push(ch);
            if ch.is_ascii_alphabetic() {
                ended_with_reset = is_sgr_reset(sequence);
                output.push_str(sequence);
                escape = None;
            }
            continue;
        }
        if ch == '\x1b' {
            had_ansi = true;
            escape = Some(String::from(ch));
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            truncated = true;
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if had_ansi && (truncated || !ended_with_reset) {
        output.push_str(SGR_RESET);
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    output
}

const SGR_RESET: &str = "\x1b[0m";

fn is_sgr_reset(sequence: &str) -> bool {
    sequence == SGR_RESET || sequence == "\x1b[m"
}
