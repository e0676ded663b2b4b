//! Tests for loading configuration from the environment and CLI flags.

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::CourseRatingConfig;

/// Loads configuration with an isolated home directory and the given
/// environment overrides.
fn load_with(env: &[(&str, Option<&str>)], cli_args: &[&str]) -> CourseRatingConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("COURSESTAR_COURSE_ID", None),
        ("COURSESTAR_THEME", None),
        ("COURSESTAR_SUBMIT_TIMEOUT_SECONDS", None),
    ];
    for (key, value) in env {
        if let Some(slot) = vars.iter_mut().find(|(existing, _)| existing == key) {
            slot.1 = *value;
        } else {
            vars.push((*key, *value));
        }
    }
    let _guard = env_lock::lock_env(vars);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("coursestar")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    CourseRatingConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn course_id_loads_from_environment_variable() {
    let config = load_with(&[("COURSESTAR_COURSE_ID", Some("env-course"))], &[]);

    assert_eq!(config.course_id.as_deref(), Some("env-course"));
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with(
        &[("COURSESTAR_COURSE_ID", Some("env-course"))],
        &["--course-id", "cli-course", "--theme", "dark"],
    );

    assert_eq!(config.course_id.as_deref(), Some("cli-course"));
    assert_eq!(config.theme.as_deref(), Some("dark"));
}

#[rstest]
fn submit_timeout_loads_from_environment_variable() {
    let config = load_with(&[("COURSESTAR_SUBMIT_TIMEOUT_SECONDS", Some("30"))], &[]);

    assert_eq!(config.submit_timeout_seconds, 30);
}

#[rstest]
fn submit_timeout_defaults_when_unset() {
    let config = load_with(&[], &[]);

    assert_eq!(config.submit_timeout_seconds, 10);
}
