//! Coursestar CLI entrypoint for the course rating widget.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use coursestar::{AppError, CourseRatingConfig};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;

    if let Some(log_file) = config.log_file.as_deref() {
        coursestar::logging::init_file_logging(Path::new(log_file), config.resolve_log_level()?)?;
    }

    cli::rating_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CourseRatingConfig, AppError> {
    CourseRatingConfig::load().map_err(|error| AppError::Configuration {
        message: error.to_string(),
    })
}
