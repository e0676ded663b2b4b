//! Test utilities for rating widget rendering tests.

/// Strips ANSI SGR escape sequences from rendered output.
///
/// Themed output wraps text in colour codes; tests compare the visible text.
///
/// # Example
///
/// ```
/// use coursestar::tui::components::test_utils::strip_ansi_codes;
///
/// let painted = "\x1b[33m★\x1b[0m 4.0 out of 5";
/// assert_eq!(strip_ansi_codes(painted), "★ 4.0 out of 5");
/// ```
#[must_use]
pub fn strip_ansi_codes(rendered: &str) -> String {
    let mut visible = String::with_capacity(rendered.len());
    let mut in_escape = false;

    for character in rendered.chars() {
        if character == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = !character.is_ascii_alphabetic();
        } else {
            visible.push(character);
        }
    }

    visible
}

/// Counts filled star glyphs in a rendered line.
#[must_use]
pub fn count_filled_stars(line: &str) -> usize {
    line.chars()
        .filter(|character| *character == super::star_glyph::FILLED_STAR)
        .count()
}
