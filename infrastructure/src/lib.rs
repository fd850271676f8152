//! Infrastructure layer for tool-bridge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod formatter;
pub mod logging;
pub mod sources;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileBridgeConfig, FileConfig, FileFormatterConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use formatter::AdaptiveArgumentFormatter;
pub use logging::JsonlOutcomeLogger;
pub use sources::{JsonFileToolClient, JsonFileToolHost};
pub use tools::FunctionSchemaConverter;
