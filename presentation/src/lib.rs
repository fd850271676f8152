//! Presentation layer for tool-bridge
//!
//! This crate contains CLI definitions and output formatters for
//! catalogs, rendered results and bridge statistics.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SourceArgs};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;

/// Pick the formatter for the resolved output configuration.
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    if config.is_json() {
        Box::new(JsonFormatter)
    } else {
        Box::new(ConsoleFormatter)
    }
}
