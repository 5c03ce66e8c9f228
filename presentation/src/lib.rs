//! Presentation layer for health-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::chart::RiskChart;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::QuizRepl;
