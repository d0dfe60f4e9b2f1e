//! Input/output: CLI, configuration, errors, rendering and progress

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG rendering of tilings
pub mod image;
/// Terminal progress display
pub mod progress;
