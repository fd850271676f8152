//! Configuration file loading for tool-bridge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tool-bridge.toml` or `./.tool-bridge.toml`
//! 3. Global: `$XDG_CONFIG_HOME/tool-bridge/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBridgeConfig, FileConfig, FileFormatterConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::{ConfigError, ConfigLoader};
