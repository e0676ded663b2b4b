//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Course id, rating, theme, and log level resolution
//! - `environment_loading`: Loading from environment variables and CLI flags

mod environment_loading;
mod helpers;
