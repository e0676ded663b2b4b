//! Star glyph shared by the summary row and the picker.
//!
//! A glyph is drawn filled or unfilled and, when it belongs to the picker,
//! exposes the pointer hooks (click, enter, leave) as update-loop messages.

use crate::rating::{StarRating, star_indices};
use crate::theme::{Theme, palette};
use crate::tui::messages::AppMsg;

/// Symbol of a filled star.
pub const FILLED_STAR: char = '★';
/// Symbol of an unfilled star.
pub const EMPTY_STAR: char = '☆';

/// One star of a five-star row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarGlyph {
    star: StarRating,
    filled: bool,
}

impl StarGlyph {
    /// Creates the glyph for `star`, drawn filled when `filled` is set.
    #[must_use]
    pub const fn new(star: StarRating, filled: bool) -> Self {
        Self { star, filled }
    }

    /// Returns the unstyled symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        if self.filled { FILLED_STAR } else { EMPTY_STAR }
    }

    /// Renders the glyph, colouring filled stars when the theme allows.
    #[must_use]
    pub fn render(self, theme: &Theme) -> String {
        let symbol = self.symbol().to_string();
        if self.filled {
            theme.paint(palette::filled_star(), &symbol)
        } else {
            symbol
        }
    }

    /// Message emitted when the glyph is clicked.
    #[must_use]
    pub const fn on_click(self) -> AppMsg {
        AppMsg::PickerClick(self.star)
    }

    /// Message emitted when the pointer enters the glyph.
    #[must_use]
    pub const fn on_enter(self) -> AppMsg {
        AppMsg::PickerEnter(self.star)
    }

    /// Message emitted when the pointer leaves the glyph.
    #[must_use]
    pub const fn on_leave(self) -> AppMsg {
        AppMsg::PickerLeave
    }
}

/// Builds the five glyphs of a row filled up to `level`.
pub fn star_row(level: StarRating) -> impl Iterator<Item = StarGlyph> {
    star_indices().filter_map(move |index| {
        StarRating::new(index)
            .ok()
            .map(|star| StarGlyph::new(star, level.fills(index)))
    })
}

/// Renders a row of five glyphs joined by `separator`.
#[must_use]
pub fn render_star_row(level: StarRating, theme: &Theme, separator: &str) -> String {
    star_row(level)
        .map(|glyph| glyph.render(theme))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::theme::ThemeMode;

    fn stars(value: u8) -> StarRating {
        StarRating::new(value).expect("star value should be in range")
    }

    #[rstest]
    #[case(0, "☆☆☆☆☆")]
    #[case(3, "★★★☆☆")]
    #[case(5, "★★★★★")]
    fn row_fills_up_to_level(#[case] level: u8, #[case] expected: &str) {
        let theme = Theme::plain(ThemeMode::Light);
        assert_eq!(render_star_row(stars(level), &theme, ""), expected);
    }

    #[test]
    fn row_separator_is_applied_between_glyphs() {
        let theme = Theme::plain(ThemeMode::Light);
        assert_eq!(render_star_row(stars(2), &theme, " "), "★ ★ ☆ ☆ ☆");
    }

    #[test]
    fn pointer_hooks_carry_the_glyph_position() {
        let glyph = StarGlyph::new(stars(4), false);

        assert!(matches!(glyph.on_click(), AppMsg::PickerClick(star) if star == stars(4)));
        assert!(matches!(glyph.on_enter(), AppMsg::PickerEnter(star) if star == stars(4)));
        assert!(matches!(glyph.on_leave(), AppMsg::PickerLeave));
    }

    #[test]
    fn only_filled_glyphs_are_coloured() {
        let theme = Theme::new(ThemeMode::Dark);

        assert!(StarGlyph::new(stars(1), true).render(&theme).contains('\x1b'));
        assert_eq!(StarGlyph::new(stars(1), false).render(&theme), "☆");
    }
}
