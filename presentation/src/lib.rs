//! Presentation layer for lessonsmith
//!
//! This crate contains CLI definitions, plan formatters and progress
//! reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::PlanFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
