//! Read-only summary row: five stars and the numeric average.

use crate::rating::CurrentRating;
use crate::theme::{Theme, palette};

use super::star_glyph::render_star_row;

/// Context for rendering the summary row.
#[derive(Debug, Clone, Copy)]
pub struct RatingSummaryViewContext<'a> {
    /// Average supplied by the host.
    pub current_rating: CurrentRating,
    /// Theme used for the label colour.
    pub theme: &'a Theme,
}

/// Component rendering the always-visible summary row.
#[derive(Debug, Default, Clone, Copy)]
pub struct RatingSummaryComponent;

impl RatingSummaryComponent {
    /// Renders stars filled up to `floor(current_rating)` followed by the
    /// average, e.g. `★★★★☆ 4.0 out of 5`.
    #[must_use]
    pub fn view(ctx: &RatingSummaryViewContext<'_>) -> String {
        let stars = render_star_row(ctx.current_rating.filled_stars(), ctx.theme, "");
        let label_style = ctx.theme.resolve(&palette::summary_label());
        let label = ctx.theme.paint(label_style, &ctx.current_rating.label());
        format!("{stars} {label}\n")
    }
}
