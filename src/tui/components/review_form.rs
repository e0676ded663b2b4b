//! Review form component: trigger control, star picker, comment box, and
//! submit/cancel controls.
//!
//! Rendering is a pure function of [`ReviewFormState`]; the picker fill is
//! computed per frame from hover and selection.

use unicode_width::UnicodeWidthChar;

use crate::theme::{Theme, palette};
use crate::tui::state::{FormFocus, ReviewFormState};

use super::star_glyph::render_star_row;

/// Label of the control that opens the form.
pub const WRITE_REVIEW_LABEL: &str = "Write a Review";

/// Widest the comment box grows, including its borders.
const COMMENT_BOX_MAX_WIDTH: usize = 60;
/// Narrowest comment interior still drawn.
const COMMENT_BOX_MIN_INNER: usize = 8;
/// Minimum number of interior lines in the comment box.
const COMMENT_BOX_MIN_LINES: usize = 3;
/// Cursor drawn at the end of the comment while it has focus.
const COMMENT_CURSOR: char = '_';

/// Context for rendering the review form.
#[derive(Debug, Clone, Copy)]
pub struct ReviewFormViewContext<'a> {
    /// Form state owned by the widget.
    pub state: &'a ReviewFormState,
    /// Theme used for the comment box and cancel border.
    pub theme: &'a Theme,
    /// Available terminal width in columns.
    pub max_width: usize,
}

/// Component rendering the area below the summary row.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Renders the trigger while the form is hidden, otherwise the form.
    #[must_use]
    pub fn view(ctx: &ReviewFormViewContext<'_>) -> String {
        if !ctx.state.is_visible() {
            return format!("[ {WRITE_REVIEW_LABEL} ]\n");
        }

        let mut output = String::new();
        output.push_str(&Self::render_picker(ctx));
        output.push_str(&Self::render_comment_box(ctx));
        output.push_str(&Self::render_controls(ctx));
        if let Some(failure) = ctx.state.failure() {
            output.push_str(&format!("Submission failed: {failure}\n"));
        }
        output
    }

    fn render_picker(ctx: &ReviewFormViewContext<'_>) -> String {
        let marker = focus_marker(ctx.state.focus() == FormFocus::Picker);
        let stars = render_star_row(ctx.state.picker_fill(), ctx.theme, " ");
        format!("{marker}Your rating: {stars}\n")
    }

    fn render_comment_box(ctx: &ReviewFormViewContext<'_>) -> String {
        let focused = ctx.state.focus() == FormFocus::Comment;
        let inner_width = ctx
            .max_width
            .min(COMMENT_BOX_MAX_WIDTH)
            .saturating_sub(2)
            .max(COMMENT_BOX_MIN_INNER);
        let style = ctx.theme.resolve(&palette::comment_box());

        let mut text = ctx.state.comment().to_owned();
        if focused {
            text.push(COMMENT_CURSOR);
        }
        let mut lines: Vec<&str> = text.split('\n').collect();
        let missing = COMMENT_BOX_MIN_LINES.saturating_sub(lines.len());
        lines.extend(std::iter::repeat_n("", missing));

        let border = "─".repeat(inner_width);
        let mut output = format!("{}Comment:\n", focus_marker(focused));
        output.push_str(&ctx.theme.paint(style, &format!("┌{border}┐")));
        output.push('\n');
        for line in lines {
            let content = fit_tail_to_width(line, inner_width);
            output.push_str(&ctx.theme.paint(style, &format!("│{content}│")));
            output.push('\n');
        }
        output.push_str(&ctx.theme.paint(style, &format!("└{border}┘")));
        output.push('\n');
        output
    }

    fn render_controls(ctx: &ReviewFormViewContext<'_>) -> String {
        let submit = if ctx.state.is_in_flight() {
            "[ Submitting... ]"
        } else {
            "[ Submit ]"
        };
        let border = ctx.theme.resolve(&palette::cancel_border());
        let open = ctx.theme.paint(border, "[");
        let close = ctx.theme.paint(border, "]");
        format!("{submit}  {open} Cancel {close}\n")
    }
}

const fn focus_marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}

/// Keeps the right-most characters of `line` that fit in `width` columns and
/// pads the result to exactly `width` columns.
fn fit_tail_to_width(line: &str, width: usize) -> String {
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0_usize;

    for character in line.chars().rev() {
        let char_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        used = used.saturating_add(char_width);
        kept.push(character);
    }

    let mut fitted: String = kept.into_iter().rev().collect();
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::rating::StarRating;
    use crate::theme::ThemeMode;
    use crate::tui::components::test_utils::strip_ansi_codes;

    fn stars(value: u8) -> StarRating {
        StarRating::new(value).expect("star value should be in range")
    }

    fn render(state: &ReviewFormState, theme: &Theme) -> String {
        ReviewFormComponent::view(&ReviewFormViewContext {
            state,
            theme,
            max_width: 40,
        })
    }

    #[fixture]
    fn plain() -> Theme {
        Theme::plain(ThemeMode::Light)
    }

    #[fixture]
    fn open_form() -> ReviewFormState {
        let mut state = ReviewFormState::new();
        state.open();
        state
    }

    #[rstest]
    fn hidden_form_renders_trigger_only(plain: Theme) {
        let view = render(&ReviewFormState::new(), &plain);

        assert_eq!(view, "[ Write a Review ]\n");
    }

    #[rstest]
    fn open_form_hides_trigger(plain: Theme, open_form: ReviewFormState) {
        let view = render(&open_form, &plain);

        assert!(!view.contains(WRITE_REVIEW_LABEL), "trigger shown:\n{view}");
        assert!(view.contains("> Your rating: ☆ ☆ ☆ ☆ ☆"), "picker:\n{view}");
        assert!(view.contains("[ Submit ]  [ Cancel ]"), "controls:\n{view}");
    }

    #[rstest]
    fn open_form_layout(plain: Theme, open_form: ReviewFormState) {
        let view = ReviewFormComponent::view(&ReviewFormViewContext {
            state: &open_form,
            theme: &plain,
            max_width: 20,
        });

        insta::assert_snapshot!(view.trim_end(), @r"
        > Your rating: ☆ ☆ ☆ ☆ ☆
          Comment:
        ┌──────────────────┐
        │                  │
        │                  │
        │                  │
        └──────────────────┘
        [ Submit ]  [ Cancel ]
        ");
    }

    #[rstest]
    fn picker_shows_max_of_hover_and_selection(plain: Theme, mut open_form: ReviewFormState) {
        open_form.click(stars(2));
        open_form.pointer_enter(stars(4));

        let view = render(&open_form, &plain);

        assert!(view.contains("Your rating: ★ ★ ★ ★ ☆"), "picker:\n{view}");
    }

    #[rstest]
    fn comment_box_shows_text_and_cursor_when_focused(
        plain: Theme,
        mut open_form: ReviewFormState,
    ) {
        open_form.set_comment("Great course");
        open_form.toggle_focus();

        let view = render(&open_form, &plain);

        assert!(view.contains("> Comment:"), "focus marker:\n{view}");
        assert!(view.contains("│Great course_"), "comment:\n{view}");
    }

    #[rstest]
    fn comment_box_lines_have_uniform_width(plain: Theme, mut open_form: ReviewFormState) {
        open_form.set_comment("first line\nsecond\nthird line is much longer than the box allows");

        let view = render(&open_form, &plain);
        let widths: Vec<usize> = view
            .lines()
            .filter(|line| line.starts_with('│'))
            .map(|line| line.chars().count())
            .collect();

        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|width| *width == 40), "widths: {widths:?}");
    }

    #[rstest]
    fn in_flight_form_shows_submitting(plain: Theme, mut open_form: ReviewFormState) {
        open_form.click(stars(3));
        let course = crate::rating::CourseId::new("c").expect("course id should parse");
        let _request = open_form.request_submit(&course);

        let view = render(&open_form, &plain);

        assert!(view.contains("[ Submitting... ]"), "controls:\n{view}");
    }

    #[rstest]
    fn failure_is_rendered_below_controls(plain: Theme, mut open_form: ReviewFormState) {
        open_form.fail_submission("HTTP 500");

        let view = render(&open_form, &plain);

        assert!(
            view.ends_with("Submission failed: HTTP 500\n"),
            "failure:\n{view}"
        );
    }

    #[rstest]
    #[case(ThemeMode::Light)]
    #[case(ThemeMode::Dark)]
    fn themed_form_keeps_plain_text_layout(#[case] mode: ThemeMode, open_form: ReviewFormState) {
        let coloured = render(&open_form, &Theme::new(mode));
        let plain_view = render(&open_form, &Theme::plain(mode));

        assert!(coloured.contains('\x1b'));
        assert_eq!(strip_ansi_codes(&coloured), plain_view);
    }

    #[rstest]
    #[case("abc", 5, "abc  ")]
    #[case("abcdefgh", 5, "defgh")]
    #[case("", 3, "   ")]
    fn fit_tail_keeps_end_of_line(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_tail_to_width(line, width), expected);
    }
}
