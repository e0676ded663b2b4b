//! Light and dark presentation styles for the rating widget.
//!
//! The host chooses a [`ThemeMode`] and hands the widget a [`Theme`]. Each
//! themed element asks the theme to pick between its light and dark style
//! through a [`StyleResolver`]; nothing reads ambient styling state.

use std::fmt;
use std::str::FromStr;

use crossterm::style::{Attribute, Color, ContentStyle, Stylize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation variant selected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Error returned when a theme name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme '{value}': expected 'light' or 'dark'")]
pub struct ThemeModeParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for ThemeMode {
    type Err = ThemeModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeModeParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// A pair of styles for one themed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemedStyle {
    /// Style used in light mode.
    pub light: ContentStyle,
    /// Style used in dark mode.
    pub dark: ContentStyle,
}

impl ThemedStyle {
    /// Pairs a light and a dark style.
    #[must_use]
    pub const fn new(light: ContentStyle, dark: ContentStyle) -> Self {
        Self { light, dark }
    }
}

/// Function choosing the style for the active mode.
pub type StyleResolver = fn(ThemeMode, &ThemedStyle) -> ContentStyle;

/// Picks the light style in light mode and the dark style in dark mode.
#[must_use]
pub const fn resolve_by_mode(mode: ThemeMode, style: &ThemedStyle) -> ContentStyle {
    match mode {
        ThemeMode::Light => style.light,
        ThemeMode::Dark => style.dark,
    }
}

/// Theme capability handed to the widget by its host.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ThemeMode,
    resolver: StyleResolver,
    colour: bool,
}

impl Theme {
    /// Creates a colour theme for `mode` using [`resolve_by_mode`].
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            resolver: resolve_by_mode,
            colour: true,
        }
    }

    /// Creates a theme that never emits escape sequences.
    #[must_use]
    pub const fn plain(mode: ThemeMode) -> Self {
        Self {
            mode,
            resolver: resolve_by_mode,
            colour: false,
        }
    }

    /// Replaces the style resolver.
    #[must_use]
    pub const fn with_resolver(mut self, resolver: StyleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Enables or disables colour output.
    #[must_use]
    pub const fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns whether styles are rendered as escape sequences.
    #[must_use]
    pub const fn colour_enabled(&self) -> bool {
        self.colour
    }

    /// Resolves the style for the active mode.
    #[must_use]
    pub fn select(&self, light: ContentStyle, dark: ContentStyle) -> ContentStyle {
        (self.resolver)(self.mode, &ThemedStyle::new(light, dark))
    }

    /// Resolves a [`ThemedStyle`] for the active mode.
    #[must_use]
    pub fn resolve(&self, style: &ThemedStyle) -> ContentStyle {
        self.select(style.light, style.dark)
    }

    /// Renders `text` with `style`, or verbatim when colour is disabled.
    #[must_use]
    pub fn paint(&self, style: ContentStyle, text: &str) -> String {
        if !self.colour || style == ContentStyle::default() {
            return text.to_owned();
        }
        style.apply(text).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// Styles for the elements the widget themes.
pub mod palette {
    use super::{Attribute, Color, ContentStyle, Stylize, ThemedStyle};

    /// Background and border of the comment box.
    #[must_use]
    pub fn comment_box() -> ThemedStyle {
        ThemedStyle::new(
            ContentStyle::new().with(Color::DarkGrey).on(Color::White),
            ContentStyle::new().with(Color::Grey).on(Color::Black),
        )
    }

    /// Border of the cancel control.
    #[must_use]
    pub fn cancel_border() -> ThemedStyle {
        ThemedStyle::new(
            ContentStyle::new().with(Color::DarkGrey),
            ContentStyle::new().with(Color::Grey),
        )
    }

    /// Colour of the `x.y out of 5` summary label.
    #[must_use]
    pub fn summary_label() -> ThemedStyle {
        ThemedStyle::new(
            ContentStyle::new().with(Color::DarkGrey),
            ContentStyle::new().with(Color::White),
        )
    }

    /// Filled star glyphs; identical in both modes.
    #[must_use]
    pub fn filled_star() -> ContentStyle {
        ContentStyle::new().with(Color::Yellow).attribute(Attribute::Bold)
    }
}
