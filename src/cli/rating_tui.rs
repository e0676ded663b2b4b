//! TUI mode for rating a course.
//!
//! This module resolves configuration into the widget's inputs, chooses a
//! submission handler, and runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use coursestar::tui::{CourseRatingApp, WidgetContext, set_widget_context};
use coursestar::{
    AppError, CourseRatingConfig, DryRunSubmitter, HttpRatingSubmitter, RatingSubmitter, Theme,
};

/// Runs the rating TUI for the configured course.
///
/// # Errors
///
/// Returns an error if:
/// - The course id is missing or blank
/// - The current rating, theme, or submit URL is invalid
/// - The TUI fails to initialise
pub async fn run(config: &CourseRatingConfig) -> Result<(), AppError> {
    let context = build_context(config, colour_allowed())?;
    tracing::info!(
        course_id = %context.course_id,
        theme = %context.theme.mode(),
        "starting rating widget"
    );

    // Store the context in global state for Model::init() to retrieve.
    // If already set, this is a no-op and the existing context remains.
    let _ = set_widget_context(context);

    run_tui().await.map_err(|error| AppError::Terminal {
        message: error.to_string(),
    })
}

/// Resolves configuration into the widget's start-up context.
pub(crate) fn build_context(
    config: &CourseRatingConfig,
    colour: bool,
) -> Result<WidgetContext, AppError> {
    let course_id = config.require_course_id()?;
    let current_rating = config.resolve_current_rating()?;
    let theme = Theme::new(config.resolve_theme_mode()?).with_colour(colour);
    let submitter = build_submitter(config)?;

    Ok(WidgetContext {
        course_id,
        current_rating,
        theme,
        submitter,
    })
}

/// Chooses the HTTP handler when an endpoint is configured, otherwise the
/// dry-run handler.
fn build_submitter(config: &CourseRatingConfig) -> Result<Arc<dyn RatingSubmitter>, AppError> {
    match config.submit_url.as_deref() {
        Some(url) => {
            let submitter = HttpRatingSubmitter::new(url, config.submit_timeout())?;
            tracing::info!(endpoint = %submitter.endpoint(), "posting ratings over HTTP");
            Ok(Arc::new(submitter))
        }
        None => {
            tracing::warn!("no submit URL configured; ratings will only be logged");
            Ok(Arc::new(DryRunSubmitter))
        }
    }
}

/// Colour is disabled when `NO_COLOR` is set to a non-empty value.
fn colour_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
}

/// Runs the bubbletea-rs program with the `CourseRatingApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // CourseRatingApp::init() retrieves the context from module-level storage.
    let program = Program::<CourseRatingApp>::builder()
        .alt_screen(true)
        .build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
