//! Input handling for the TUI application.
//!
//! This module provides context-aware key-to-message mapping. A printable key
//! is a command on the summary and picker but text inside the comment box.

use crossterm::event::{KeyCode, KeyModifiers};

use super::components::StarGlyph;
use super::messages::AppMsg;
use crate::rating::StarRating;

/// Which part of the widget receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The form is hidden; only the summary and trigger are shown.
    Summary,
    /// The form is open with focus on the star picker.
    Picker,
    /// The form is open with focus on the comment box.
    Comment,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key, context);
    }

    match context {
        InputContext::Summary => map_summary_key(key.key),
        InputContext::Picker => map_picker_key(key.key),
        InputContext::Comment => map_comment_key(key.key),
    }
}

fn map_control_key(code: KeyCode, context: InputContext) -> Option<AppMsg> {
    match (code, context) {
        (KeyCode::Char('c'), _) => Some(AppMsg::Quit),
        (KeyCode::Char('s'), InputContext::Picker | InputContext::Comment) => {
            Some(AppMsg::SubmitReview)
        }
        _ => None,
    }
}

fn map_summary_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('w') | KeyCode::Enter => Some(AppMsg::OpenReviewForm),
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_picker_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(AppMsg::PickerHoverPrevious),
        KeyCode::Right | KeyCode::Char('l') => Some(AppMsg::PickerHoverNext),
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppMsg::PickerClickHovered),
        KeyCode::Char(digit @ '1'..='5') => digit_to_star(digit)
            .map(|star| StarGlyph::new(star, false).on_click()),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleFocus),
        KeyCode::Esc => Some(AppMsg::CancelReview),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_comment_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(character) => Some(AppMsg::CommentInsertChar(character)),
        KeyCode::Enter => Some(AppMsg::CommentInsertChar('\n')),
        KeyCode::Backspace => Some(AppMsg::CommentBackspace),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleFocus),
        KeyCode::Esc => Some(AppMsg::CancelReview),
        _ => None,
    }
}

fn digit_to_star(digit: char) -> Option<StarRating> {
    digit
        .to_digit(10)
        .and_then(|value| u8::try_from(value).ok())
        .and_then(|value| StarRating::new(value).ok())
}
