//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bridge;
mod formatter;
mod logging;
mod output;

pub use bridge::FileBridgeConfig;
pub use formatter::FileFormatterConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use bridge_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog and dispatch settings
    pub bridge: FileBridgeConfig,
    /// Argument formatter settings
    pub formatter: FileFormatterConfig,
    /// Structured outcome log
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is a warning: invalid values fall back to defaults when
    /// the configuration is converted.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.bridge.validate());
        issues.extend(self.formatter.validate());
        issues
    }
}
