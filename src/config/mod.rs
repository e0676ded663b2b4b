//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.coursestar.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `COURSESTAR_COURSE_ID`,
//!    `COURSESTAR_CURRENT_RATING`, `COURSESTAR_THEME`, ...
//! 4. **Command-line arguments** – `--course-id`/`-c`, `--theme`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! course_id = "rust-101"
//! current_rating = 4.2
//! theme = "dark"
//! submit_url = "https://ratings.example.com/api/ratings"
//! submit_timeout_seconds = 10
//! log_file = "coursestar.log"
//! log_level = "debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::rating::{CourseId, CurrentRating};
use crate::theme::ThemeMode;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use coursestar::CourseRatingConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CourseRatingConfig::load().expect("failed to load configuration");
/// let course_id = config.require_course_id().expect("course id required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "COURSESTAR",
    discovery(
        dotfile_name = ".coursestar.toml",
        config_file_name = "coursestar.toml",
        app_name = "coursestar"
    )
)]
pub struct CourseRatingConfig {
    /// Identifier of the course being rated.
    ///
    /// Can be provided via:
    /// - CLI: `--course-id <ID>` or `-c <ID>`
    /// - Environment: `COURSESTAR_COURSE_ID`
    /// - Config file: `course_id = "..."`
    #[ortho_config(cli_short = 'c')]
    pub course_id: Option<String>,

    /// Current course average shown in the summary row.
    ///
    /// Defaults to zero when absent.
    ///
    /// Can be provided via:
    /// - CLI: `--current-rating <N>` or `-r <N>`
    /// - Environment: `COURSESTAR_CURRENT_RATING`
    /// - Config file: `current_rating = 4.2`
    #[ortho_config(cli_short = 'r')]
    pub current_rating: Option<f64>,

    /// Presentation theme, `light` or `dark`.
    ///
    /// Can be provided via:
    /// - CLI: `--theme <MODE>` or `-t <MODE>`
    /// - Environment: `COURSESTAR_THEME`
    /// - Config file: `theme = "dark"`
    #[ortho_config(cli_short = 't')]
    pub theme: Option<String>,

    /// HTTP endpoint receiving rating submissions.
    ///
    /// When unset, submissions are logged and accepted without being stored.
    ///
    /// Can be provided via:
    /// - CLI: `--submit-url <URL>` or `-u <URL>`
    /// - Environment: `COURSESTAR_SUBMIT_URL`
    /// - Config file: `submit_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub submit_url: Option<String>,

    /// Timeout for HTTP submissions, in seconds.
    ///
    /// Defaults to 10 seconds.
    #[ortho_config()]
    pub submit_timeout_seconds: u64,

    /// File receiving log output.
    ///
    /// Logging is disabled when unset; the terminal belongs to the TUI.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Maximum log level: `trace`, `debug`, `info`, `warn`, or `error`.
    ///
    /// Defaults to `info`.
    #[ortho_config()]
    pub log_level: Option<String>,
}

const DEFAULT_SUBMIT_TIMEOUT_SECONDS: u64 = 10;

impl Default for CourseRatingConfig {
    fn default() -> Self {
        Self {
            course_id: None,
            current_rating: None,
            theme: None,
            submit_url: None,
            submit_timeout_seconds: DEFAULT_SUBMIT_TIMEOUT_SECONDS,
            log_file: None,
            log_level: None,
        }
    }
}

impl CourseRatingConfig {
    /// Returns the configured course identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCourseId`] when no identifier is configured,
    /// or [`AppError::Rating`] when it is blank.
    pub fn require_course_id(&self) -> Result<CourseId, AppError> {
        let raw = self.course_id.as_deref().ok_or(AppError::MissingCourseId)?;
        Ok(CourseId::new(raw)?)
    }

    /// Returns the configured current rating, defaulting to zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCurrentRating`] when the value is not a
    /// finite number in `0..=5`.
    pub fn resolve_current_rating(&self) -> Result<CurrentRating, AppError> {
        let Some(value) = self.current_rating else {
            return Ok(CurrentRating::default());
        };

        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(AppError::InvalidCurrentRating {
                value: value.to_string(),
            });
        }

        Ok(CurrentRating::new(value))
    }

    /// Returns the configured theme mode, defaulting to light.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidTheme`] when the name is not recognised.
    pub fn resolve_theme_mode(&self) -> Result<ThemeMode, AppError> {
        self.theme.as_deref().map_or(Ok(ThemeMode::default()), |name| {
            name.parse::<ThemeMode>()
                .map_err(|error| AppError::InvalidTheme { value: error.value })
        })
    }

    /// Returns the configured log level, defaulting to `info`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLogLevel`] when the name is not recognised.
    pub fn resolve_log_level(&self) -> Result<tracing::Level, AppError> {
        self.log_level
            .as_deref()
            .map_or(Ok(tracing::Level::INFO), |name| {
                name.trim()
                    .parse::<tracing::Level>()
                    .map_err(|_| AppError::InvalidLogLevel {
                        value: name.to_owned(),
                    })
            })
    }

    /// Returns the HTTP submission timeout.
    #[must_use]
    pub const fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_seconds)
    }
}

#[cfg(test)]
mod tests;
