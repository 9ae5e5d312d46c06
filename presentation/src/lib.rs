//! Presentation layer for weather-station
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the HTTP forecast service.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{ServerError, build_app, serve, shutdown_signal};
