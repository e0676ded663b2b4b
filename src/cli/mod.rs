//! CLI operation mode handlers.
//!
//! - [`rating_tui`]: Interactive TUI for rating a course

pub mod rating_tui;
